use enum_map::{enum_map, Enum, EnumMap};

use crate::engine::Algorithm;

/// Edge-triggered user input.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Enum)]
pub enum Command {
    SelectBubble,
    SelectSelection,
    SelectInsertion,
    SelectQuick,
    Reset,
}

impl Command {
    pub fn select(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Bubble => Command::SelectBubble,
            Algorithm::Selection => Command::SelectSelection,
            Algorithm::Insertion => Command::SelectInsertion,
            Algorithm::Quick => Command::SelectQuick,
        }
    }

    pub fn algorithm(&self) -> Option<Algorithm> {
        match self {
            Command::SelectBubble => Some(Algorithm::Bubble),
            Command::SelectSelection => Some(Algorithm::Selection),
            Command::SelectInsertion => Some(Algorithm::Insertion),
            Command::SelectQuick => Some(Algorithm::Quick),
            Command::Reset => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self.algorithm() {
            Some(algorithm) => algorithm.name(),
            None => "Reset",
        }
    }
}

/// Which key fires which command. Keys are stored as their lowercase
/// character so the table does not depend on a windowing backend.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    keys: EnumMap<Command, char>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            keys: enum_map! {
                Command::SelectBubble => '1',
                Command::SelectSelection => '2',
                Command::SelectInsertion => '3',
                Command::SelectQuick => '4',
                Command::Reset => 'r',
            },
        }
    }
}

impl KeyBindings {
    pub fn key(&self, command: Command) -> char {
        self.keys[command]
    }

    pub fn command(&self, key: char) -> Option<Command> {
        let key = key.to_ascii_lowercase();

        self.keys
            .iter()
            .find(|&(_, &bound)| bound == key)
            .map(|(command, _)| command)
    }

    pub fn bind(&mut self, command: Command, key: char) {
        self.keys[command] = key.to_ascii_lowercase();
    }

    /// e.g. `1: Bubble | 2: Selection | 3: Insertion | 4: Quick | R: Reset`
    pub fn help_line(&self) -> String {
        self.keys
            .iter()
            .map(|(command, key)| format!("{}: {}", key.to_ascii_uppercase(), command.label()))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
