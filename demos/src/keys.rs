//! keyboard bindings of the demos

use winit::keyboard::{Key, NamedKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasketCommand {
    Help,
    Quit,
    SmallPoints,
    BigPoints,
    Grow,
    Shrink,
    ZoomIn,
    ZoomOut,
}

pub const GASKET_HELP: &str = "Commands are p/P for point size, +/- for number of points, \
space/b for zoom, left click to pan, q to quit";

impl GasketCommand {
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Named(NamedKey::Escape) => Some(Self::Quit),
            Key::Named(NamedKey::Space) => Some(Self::ZoomIn),
            Key::Character(c) => Self::from_char(c),
            _ => None,
        }
    }

    pub fn from_char(c: &str) -> Option<Self> {
        match c {
            "h" => Some(Self::Help),
            "q" | "Q" => Some(Self::Quit),
            "p" => Some(Self::SmallPoints),
            "P" => Some(Self::BigPoints),
            "+" => Some(Self::Grow),
            "-" => Some(Self::Shrink),
            " " => Some(Self::ZoomIn),
            "b" | "B" => Some(Self::ZoomOut),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DroneCommand {
    Quit,
    Fire,
}

impl DroneCommand {
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Named(NamedKey::Escape) => Some(Self::Quit),
            Key::Named(NamedKey::Space) => Some(Self::Fire),
            Key::Character(c) => Self::from_char(c),
            _ => None,
        }
    }

    pub fn from_char(c: &str) -> Option<Self> {
        match c {
            "q" | "Q" => Some(Self::Quit),
            " " => Some(Self::Fire),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gasket_bindings() {
        use GasketCommand::*;
        let table = [
            ("h", Help),
            ("q", Quit),
            ("Q", Quit),
            ("p", SmallPoints),
            ("P", BigPoints),
            ("+", Grow),
            ("-", Shrink),
            (" ", ZoomIn),
            ("b", ZoomOut),
            ("B", ZoomOut),
        ];
        for (c, cmd) in table {
            assert_eq!(GasketCommand::from_char(c), Some(cmd), "{c:?}");
        }
        assert_eq!(GasketCommand::from_char("x"), None);
        assert_eq!(
            GasketCommand::from_key(&Key::Named(NamedKey::Escape)),
            Some(Quit)
        );
        assert_eq!(
            GasketCommand::from_key(&Key::Named(NamedKey::Space)),
            Some(ZoomIn)
        );
        assert_eq!(GasketCommand::from_key(&Key::Named(NamedKey::Enter)), None);
    }

    #[test]
    fn drone_bindings() {
        assert_eq!(DroneCommand::from_char("q"), Some(DroneCommand::Quit));
        assert_eq!(DroneCommand::from_char(" "), Some(DroneCommand::Fire));
        assert_eq!(DroneCommand::from_char("+"), None);
        assert_eq!(
            DroneCommand::from_key(&Key::Named(NamedKey::Space)),
            Some(DroneCommand::Fire)
        );
    }
}
