//! Text commands and their parser.

use std::str::FromStr;

use inventory_core::{ContainerKind, SlotRef};

pub const HELP: &str = "\
Commands:
  help                          show this help
  items                         list every known item
  give <item> [count]           put items in your bag (tools go to the toolbar)
  show <container>              print a container
  open|close <storage>          open or close the fridge or pantry
  use-storage <storage>         toggle the fridge or pantry
  tab                           toggle the inventory panel
  drag <c> <i> <c> <j>          drag slot i of one panel onto slot j of another
  swap <c> <i> <j>              swap two slots of one panel
  take <c> <i> [n]              remove items from a slot
  select <n> | next | prev      change the selected toolbar slot
  use                           use the selected tool
  dump <container>              print a container as JSON
  quit                          leave the kitchen
Containers: inventory (inv), toolbar (bar), fridge, pantry";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Items,
    Give { item: String, count: u32 },
    Show(ContainerKind),
    Open(ContainerKind),
    Close(ContainerKind),
    UseStorage(ContainerKind),
    Tab,
    Drag { from: SlotRef, to: SlotRef },
    Swap { container: ContainerKind, from: usize, to: usize },
    Take { container: ContainerKind, index: usize, amount: u32 },
    Select(usize),
    Next,
    Prev,
    Use,
    Dump(ContainerKind),
    Quit,
}

/// Errors from parsing or carrying out a command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("Unknown container '{0}'")]
    UnknownContainer(String),

    #[error("{0} is not a storage container")]
    NotStorage(ContainerKind),

    #[error("Unknown item '{0}'")]
    UnknownItem(String),

    #[error("The {0} panel is not open")]
    PanelHidden(ContainerKind),

    #[error("{container} has no slot {index}")]
    NoSuchSlot { container: ContainerKind, index: usize },

    #[error("Slot {index} of {container} is empty")]
    EmptySlot { container: ContainerKind, index: usize },

    #[error("The {container} does not take {item}")]
    Rejected { container: ContainerKind, item: String },

    #[error("Not enough room for {item} x{count}")]
    NoRoom { item: String, count: u32 },

    #[error("Could not write dump: {0}")]
    Dump(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            return Err(CommandError::Usage("help"));
        };

        let command = match (name.to_ascii_lowercase().as_str(), args) {
            ("help" | "?", []) => Command::Help,
            ("items", []) => Command::Items,
            ("give", [_, ..]) => parse_give(args)?,
            ("give", _) => return Err(CommandError::Usage("give <item> [count]")),
            ("show", [c]) => Command::Show(parse_container(c)?),
            ("show", _) => return Err(CommandError::Usage("show <container>")),
            ("open", [c]) => Command::Open(parse_storage(c)?),
            ("close", [c]) => Command::Close(parse_storage(c)?),
            ("use-storage", [c]) => Command::UseStorage(parse_storage(c)?),
            ("open" | "close" | "use-storage", _) => {
                return Err(CommandError::Usage("open|close|use-storage <fridge|pantry>"));
            }
            ("tab", []) => Command::Tab,
            ("drag", [c, i, d, j]) => Command::Drag {
                from: SlotRef::new(parse_container(c)?, parse_number(i)?),
                to: SlotRef::new(parse_container(d)?, parse_number(j)?),
            },
            ("drag", _) => return Err(CommandError::Usage("drag <c> <i> <c> <j>")),
            ("swap", [c, i, j]) => Command::Swap {
                container: parse_container(c)?,
                from: parse_number(i)?,
                to: parse_number(j)?,
            },
            ("swap", _) => return Err(CommandError::Usage("swap <c> <i> <j>")),
            ("take", [c, i]) => Command::Take {
                container: parse_container(c)?,
                index: parse_number(i)?,
                amount: 1,
            },
            ("take", [c, i, n]) => Command::Take {
                container: parse_container(c)?,
                index: parse_number(i)?,
                amount: parse_number(n)?,
            },
            ("take", _) => return Err(CommandError::Usage("take <c> <i> [n]")),
            ("select", [n]) => Command::Select(parse_number(n)?),
            ("select", _) => return Err(CommandError::Usage("select <n>")),
            ("next", []) => Command::Next,
            ("prev", []) => Command::Prev,
            ("use", []) => Command::Use,
            ("dump", [c]) => Command::Dump(parse_container(c)?),
            ("dump", _) => return Err(CommandError::Usage("dump <container>")),
            ("quit" | "exit", []) => Command::Quit,
            _ => return Err(CommandError::Unknown(name.to_owned())),
        };
        Ok(command)
    }
}

/// `give <item words...> [count]`; item names may contain spaces.
fn parse_give(args: &[&str]) -> Result<Command, CommandError> {
    let (name_words, count) = match args.split_last() {
        Some((last, rest)) if !rest.is_empty() && last.parse::<u32>().is_ok() => {
            (rest, parse_number(last)?)
        }
        _ => (args, 1),
    };
    if count == 0 {
        return Err(CommandError::InvalidNumber("0".to_owned()));
    }
    Ok(Command::Give {
        item: name_words.join(" "),
        count,
    })
}

fn parse_number<T: FromStr>(word: &str) -> Result<T, CommandError> {
    word.parse()
        .map_err(|_| CommandError::InvalidNumber(word.to_owned()))
}

pub fn parse_container(word: &str) -> Result<ContainerKind, CommandError> {
    let kind = match word.to_ascii_lowercase().as_str() {
        "inv" | "inventory" | "bag" => ContainerKind::PlayerInventory,
        "bar" | "hotbar" => ContainerKind::Toolbar,
        other => other
            .parse()
            .map_err(|_| CommandError::UnknownContainer(word.to_owned()))?,
    };
    if kind == ContainerKind::Generic {
        return Err(CommandError::UnknownContainer(word.to_owned()));
    }
    Ok(kind)
}

fn parse_storage(word: &str) -> Result<ContainerKind, CommandError> {
    match parse_container(word)? {
        kind @ (ContainerKind::Fridge | ContainerKind::Pantry) => Ok(kind),
        kind => Err(CommandError::NotStorage(kind)),
    }
}
