//! The command vocabulary.
//!
//! Inbound `PlayerCommand`s are loose strings; this module pins them to
//! the verbs the game understands. Unknown verbs are not an error: they
//! become `Command::Unknown` and flow through the pipeline so the client
//! still gets its broadcast.

use std::fmt;

use wyrdgrid_domain::{BodySlot, Direction};
use wyrdgrid_protocol::PlayerCommand;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Move(Direction),
    Pickup { item: String },
    Drop { item: String },
    Equip { slot: BodySlot, item: String },
    Say { words: String },
    /// Anything the game does not recognize.
    Unknown { raw: String },
}

impl Command {
    /// Parse the wire command. Malformed argument lists map to
    /// `Unknown` rather than an error; the pipeline narrates them.
    pub fn parse(cmd: &PlayerCommand) -> Self {
        let verb = cmd.command.trim().to_ascii_lowercase();
        let args = &cmd.args;
        match verb.as_str() {
            "move" | "go" => match args.first().map(|a| a.parse::<Direction>()) {
                Some(Ok(dir)) => Self::Move(dir),
                _ => Self::unknown(cmd),
            },
            "pickup" | "take" if !args.is_empty() => Self::Pickup {
                item: args.join(" "),
            },
            "drop" if !args.is_empty() => Self::Drop {
                item: args.join(" "),
            },
            "equip" if args.len() >= 2 => match args[0].parse::<BodySlot>() {
                Ok(slot) => Self::Equip {
                    slot,
                    item: args[1..].join(" "),
                },
                Err(_) => Self::unknown(cmd),
            },
            "say" if !args.is_empty() => Self::Say {
                words: args.join(" "),
            },
            _ => Self::unknown(cmd),
        }
    }

    fn unknown(cmd: &PlayerCommand) -> Self {
        let raw = if cmd.args.is_empty() {
            cmd.command.clone()
        } else {
            format!("{} {}", cmd.command, cmd.args.join(" "))
        };
        Self::Unknown { raw }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(dir) => write!(f, "move {dir}"),
            Self::Pickup { item } => write!(f, "pickup {item}"),
            Self::Drop { item } => write!(f, "drop {item}"),
            Self::Equip { slot, item } => write!(f, "equip {item} on {slot}"),
            Self::Say { words } => write!(f, "say \"{words}\""),
            Self::Unknown { raw } => f.write_str(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(verb: &str, args: &[&str]) -> PlayerCommand {
        PlayerCommand::new(verb, args.iter().map(|a| a.to_string()).collect())
    }

    #[test]
    fn parses_movement_with_aliases() {
        assert_eq!(
            Command::parse(&cmd("move", &["north"])),
            Command::Move(Direction::North)
        );
        assert_eq!(
            Command::parse(&cmd("go", &["e"])),
            Command::Move(Direction::East)
        );
    }

    #[test]
    fn movement_without_direction_is_unknown() {
        assert!(matches!(
            Command::parse(&cmd("move", &[])),
            Command::Unknown { .. }
        ));
        assert!(matches!(
            Command::parse(&cmd("move", &["up"])),
            Command::Unknown { .. }
        ));
    }

    #[test]
    fn parses_multi_word_item_names() {
        assert_eq!(
            Command::parse(&cmd("take", &["rusty", "sword"])),
            Command::Pickup {
                item: "rusty sword".into()
            }
        );
        assert_eq!(
            Command::parse(&cmd("equip", &["hands", "oak", "staff"])),
            Command::Equip {
                slot: BodySlot::Hands,
                item: "oak staff".into()
            }
        );
    }

    #[test]
    fn unknown_verbs_keep_their_raw_text() {
        let parsed = Command::parse(&cmd("dance", &["wildly"]));
        assert_eq!(
            parsed,
            Command::Unknown {
                raw: "dance wildly".into()
            }
        );
    }
}
