use crate::labels::{self, Labelled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnergyType {
    Acid,
    Cold,
    Electricity,
    Fire,
    Force,
    Negative,
    Positive,
    Sonic,
}

impl EnergyType {
    pub const ALL: [EnergyType; 8] = [
        Self::Acid,
        Self::Cold,
        Self::Electricity,
        Self::Fire,
        Self::Force,
        Self::Negative,
        Self::Positive,
        Self::Sonic,
    ];

    pub fn energy_name(&self) -> String {
        labels::translate(self, "energy")
    }
}

impl Labelled for EnergyType {
    fn label_key(&self) -> String {
        format!("{:?}", self).to_lowercase()
    }
}
