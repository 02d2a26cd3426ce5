use lazy_static::lazy_static;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    PrintList,
    PrintCourse,
    Export,
    Exit,
}

const OPTIONS: [(i32, MenuChoice, &str); 5] = [
    (1, MenuChoice::Load, "Load Data Structure"),
    (2, MenuChoice::PrintList, "Print Course List"),
    (3, MenuChoice::PrintCourse, "Print Course"),
    (4, MenuChoice::Export, "Export Course List"),
    (9, MenuChoice::Exit, "Exit"),
];

lazy_static! {
    pub static ref MENU_TEXT: String = {
        let mut text = String::from("\n");
        for (key, _, label) in OPTIONS {
            text.push_str(&format!("{key}. {label}\n"));
        }
        text.push('\n');
        text
    };
}

/// Why a line of menu input was rejected. Both render as `<input> is not a valid option.`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidChoice {
    NotANumber(String),
    Unknown(i32),
}

impl std::fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidChoice::NotANumber(input) => write!(f, "{input} is not a valid option."),
            InvalidChoice::Unknown(key) => write!(f, "{key} is not a valid option."),
        }
    }
}

impl std::str::FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(input: &str) -> Result<Self, InvalidChoice> {
        let key: i32 = input
            .trim()
            .parse()
            .map_err(|_| InvalidChoice::NotANumber(input.trim().to_owned()))?;
        OPTIONS
            .iter()
            .find(|(k, _, _)| *k == key)
            .map(|(_, choice, _)| *choice)
            .ok_or(InvalidChoice::Unknown(key))
    }
}
