use crate::labels::{self, Labelled};

/// The three saving throws
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SaveType {
    Fortitude,
    Reflex,
    Will,
}

impl SaveType {
    pub const ALL: [SaveType; 3] = [Self::Fortitude, Self::Reflex, Self::Will];

    /// Short stat-block label ("Fort", "Ref", "Will")
    pub fn label(&self) -> String {
        labels::translate(self, "save")
    }
}

impl Labelled for SaveType {
    fn label_key(&self) -> String {
        format!("{:?}", self).to_lowercase()
    }
}

/// Saving throw bonuses of a creature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Saves {
    fortitude: i32,
    reflex: i32,
    will: i32,
}

impl Saves {
    pub fn new(fortitude: i32, reflex: i32, will: i32) -> Self {
        Self {
            fortitude,
            reflex,
            will,
        }
    }

    pub fn get(&self, save: SaveType) -> i32 {
        match save {
            SaveType::Fortitude => self.fortitude,
            SaveType::Reflex => self.reflex,
            SaveType::Will => self.will,
        }
    }

    pub fn fortitude(&self) -> i32 {
        self.fortitude
    }

    pub fn reflex(&self) -> i32 {
        self.reflex
    }

    pub fn will(&self) -> i32 {
        self.will
    }

    /// Adds `delta` to one save
    pub fn update(&mut self, save: SaveType, delta: i32) {
        *self.slot(save) += delta;
    }

    pub fn set(&mut self, save: SaveType, value: i32) {
        *self.slot(save) = value;
    }

    fn slot(&mut self, save: SaveType) -> &mut i32 {
        match save {
            SaveType::Fortitude => &mut self.fortitude,
            SaveType::Reflex => &mut self.reflex,
            SaveType::Will => &mut self.will,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_and_set() {
        let mut saves = Saves::new(2, 0, 1);
        saves.update(SaveType::Reflex, 2);
        saves.update(SaveType::Will, -3);
        saves.set(SaveType::Fortitude, 7);

        assert_eq!(saves.fortitude(), 7);
        assert_eq!(saves.reflex(), 2);
        assert_eq!(saves.will(), -2);
        assert_eq!(saves.get(SaveType::Reflex), 2);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = SaveType::ALL.iter().map(SaveType::label).collect();
        assert_eq!(labels, vec!["Fort", "Ref", "Will"]);
    }
}
