//! Gameplay settings
//!
//! One `Settings` value is owned by the game loop and passed by reference to
//! every update that reads it, so edits made on the settings screen apply
//! to the running session immediately.

use serde::{Deserialize, Serialize};

/// Adjustable fields, in settings-screen order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingField {
    MouseSensitivity,
    PlayerSpeed,
    PlayerStartingTime,
    PlayerMaxTime,
    PlayerDamage,
    BossStartingTime,
    BossDamage,
    TomatoHeal,
}

impl SettingField {
    pub const ALL: [SettingField; 8] = [
        SettingField::MouseSensitivity,
        SettingField::PlayerSpeed,
        SettingField::PlayerStartingTime,
        SettingField::PlayerMaxTime,
        SettingField::PlayerDamage,
        SettingField::BossStartingTime,
        SettingField::BossDamage,
        SettingField::TomatoHeal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingField::MouseSensitivity => "Mouse Sensitivity",
            SettingField::PlayerSpeed => "Player Speed",
            SettingField::PlayerStartingTime => "Player Starting Time",
            SettingField::PlayerMaxTime => "Player Max Time",
            SettingField::PlayerDamage => "Player Damage Taken",
            SettingField::BossStartingTime => "Boss Starting Time",
            SettingField::BossDamage => "Boss Damage Taken",
            SettingField::TomatoHeal => "Tomato Heal",
        }
    }

    /// Step applied per adjustment (before the fast multiplier)
    pub fn step(&self) -> f32 {
        match self {
            SettingField::MouseSensitivity => 0.01,
            SettingField::PlayerSpeed => 10.0,
            SettingField::PlayerStartingTime => 5.0,
            SettingField::PlayerMaxTime => 10.0,
            SettingField::PlayerDamage => 0.5,
            SettingField::BossStartingTime => 10.0,
            SettingField::BossDamage => 0.5,
            SettingField::TomatoHeal => 0.5,
        }
    }

    /// Inclusive (min, max) range
    pub fn range(&self) -> (f32, f32) {
        match self {
            SettingField::MouseSensitivity => (0.01, 1.0),
            SettingField::PlayerSpeed => (50.0, 500.0),
            SettingField::PlayerStartingTime => (10.0, 300.0),
            SettingField::PlayerMaxTime => (60.0, 600.0),
            SettingField::PlayerDamage => (1.0, 50.0),
            SettingField::BossStartingTime => (60.0, 1000.0),
            SettingField::BossDamage => (0.5, 50.0),
            SettingField::TomatoHeal => (1.0, 50.0),
        }
    }

    /// Next field down the list, wrapping to the top
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous field up the list, wrapping to the bottom
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Gameplay tuning shared by player, boss and camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Camera degrees per pointer unit
    pub mouse_sensitivity: f32,

    // === Player ===
    /// Walk speed (units/s)
    pub player_speed: f32,
    /// Time-value at the start of a session
    pub player_starting_time: f32,
    /// Heal cap
    pub player_max_time: f32,
    /// Damage the boss deals to the player per hit
    pub player_damage_per_hit: f32,

    // === Boss ===
    pub boss_starting_time: f32,
    /// Damage the player deals to the boss per hit
    pub boss_damage_per_hit: f32,

    // === Pickups & projectiles ===
    pub tomato_heal_amount: f32,
    pub tomato_lifetime: f32,
    pub projectile_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.2,

            player_speed: 150.0,
            player_starting_time: 60.0,
            player_max_time: 120.0,
            player_damage_per_hit: 5.0,

            boss_starting_time: 300.0,
            boss_damage_per_hit: 3.0,

            tomato_heal_amount: 5.0,
            tomato_lifetime: 8.0,
            projectile_speed: 200.0,
        }
    }
}

impl Settings {
    /// Current value of an adjustable field
    pub fn get(&self, field: SettingField) -> f32 {
        match field {
            SettingField::MouseSensitivity => self.mouse_sensitivity,
            SettingField::PlayerSpeed => self.player_speed,
            SettingField::PlayerStartingTime => self.player_starting_time,
            SettingField::PlayerMaxTime => self.player_max_time,
            SettingField::PlayerDamage => self.player_damage_per_hit,
            SettingField::BossStartingTime => self.boss_starting_time,
            SettingField::BossDamage => self.boss_damage_per_hit,
            SettingField::TomatoHeal => self.tomato_heal_amount,
        }
    }

    fn slot(&mut self, field: SettingField) -> &mut f32 {
        match field {
            SettingField::MouseSensitivity => &mut self.mouse_sensitivity,
            SettingField::PlayerSpeed => &mut self.player_speed,
            SettingField::PlayerStartingTime => &mut self.player_starting_time,
            SettingField::PlayerMaxTime => &mut self.player_max_time,
            SettingField::PlayerDamage => &mut self.player_damage_per_hit,
            SettingField::BossStartingTime => &mut self.boss_starting_time,
            SettingField::BossDamage => &mut self.boss_damage_per_hit,
            SettingField::TomatoHeal => &mut self.tomato_heal_amount,
        }
    }

    /// Step a field up (`direction > 0`) or down, clamped to its range.
    /// `fast` multiplies the step by 5.
    pub fn adjust(&mut self, field: SettingField, direction: i8, fast: bool) {
        if direction == 0 {
            return;
        }
        let multiplier = if fast { 5.0 } else { 1.0 };
        let (min, max) = field.range();
        let delta = field.step() * multiplier * f32::from(direction.signum());
        let slot = self.slot(field);
        *slot = (*slot + delta).clamp(min, max);
    }

    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }
}
