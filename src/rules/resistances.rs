use crate::rules::{EnergyType, RulesError};
use std::collections::{BTreeMap, BTreeSet};

/// Defensive abilities of a creature
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resistances {
    spell_resistance: u32,
    turn_resistance: u32,
    energy: BTreeMap<EnergyType, u32>,
    damage_reduction: Option<String>,
    vulnerabilities: BTreeSet<EnergyType>,
}

impl Resistances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spell_resistance(&self) -> u32 {
        self.spell_resistance
    }

    pub fn set_spell_resistance(&mut self, value: u32) {
        self.spell_resistance = value;
    }

    pub fn turn_resistance(&self) -> u32 {
        self.turn_resistance
    }

    pub fn set_turn_resistance(&mut self, value: u32) {
        self.turn_resistance = value;
    }

    pub fn energy_resistance(&self, energy: EnergyType) -> u32 {
        self.energy.get(&energy).copied().unwrap_or(0)
    }

    /// Sets resistance against one energy type; zero removes it
    ///
    /// # Errors
    ///
    /// Returns `RulesError::NegativeResistance` for negative values.
    pub fn set_energy_resistance(
        &mut self,
        energy: EnergyType,
        value: i32,
    ) -> Result<(), RulesError> {
        match u32::try_from(value) {
            Err(_) => return Err(RulesError::NegativeResistance(value)),
            Ok(0) => {
                self.energy.remove(&energy);
            }
            Ok(value) => {
                self.energy.insert(energy, value);
            }
        }
        Ok(())
    }

    /// Stat-block list: `cold 5, fire 10`
    pub fn energy_resistances_line(&self) -> String {
        self.energy
            .iter()
            .map(|(energy, value)| format!("{} {}", energy.energy_name(), value))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn damage_reduction(&self) -> Option<&str> {
        self.damage_reduction.as_deref()
    }

    pub fn set_damage_reduction(&mut self, value: Option<String>) {
        self.damage_reduction = value;
    }

    pub fn vulnerabilities(&self) -> &BTreeSet<EnergyType> {
        &self.vulnerabilities
    }

    pub fn add_vulnerability(&mut self, energy: EnergyType) {
        self.vulnerabilities.insert(energy);
    }

    pub fn has_spell_resistance(&self) -> bool {
        self.spell_resistance > 0
    }

    pub fn has_energy_resistance(&self) -> bool {
        !self.energy.is_empty()
    }

    pub fn has_turn_resistance(&self) -> bool {
        self.turn_resistance > 0
    }

    pub fn has_damage_reduction(&self) -> bool {
        self.damage_reduction
            .as_deref()
            .is_some_and(|dr| !dr.trim().is_empty())
    }

    pub fn has_vulnerabilities(&self) -> bool {
        !self.vulnerabilities.is_empty()
    }
}
