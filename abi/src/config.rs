use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Room, RoomType};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub hotel: HotelConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelConfig {
    #[serde(default = "default_customer_id_offset")]
    pub customer_id_offset: i64,
    #[serde(default = "default_booking_id_offset")]
    pub booking_id_offset: i64,
    #[serde(default = "default_rooms")]
    pub rooms: Vec<Room>,
}

fn default_customer_id_offset() -> i64 {
    1000
}

fn default_booking_id_offset() -> i64 {
    5000
}

/// The five rooms a fresh hotel opens with.
pub fn default_rooms() -> Vec<Room> {
    vec![
        Room::new(101, RoomType::Single, Decimal::from(100)),
        Room::new(102, RoomType::Single, Decimal::from(100)),
        Room::new(201, RoomType::Double, Decimal::from(150)),
        Room::new(202, RoomType::Double, Decimal::from(150)),
        Room::new(301, RoomType::Suite, Decimal::from(250)),
    ]
}

impl HotelConfig {
    pub fn validate(&self) -> Result<()> {
        for room in &self.rooms {
            if room.price_per_night.is_sign_negative() {
                bail!(
                    "room {} has a negative price_per_night: {}",
                    room.room_number,
                    room.price_per_night
                );
            }
        }
        Ok(())
    }
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            customer_id_offset: default_customer_id_offset(),
            booking_id_offset: default_booking_id_offset(),
            rooms: default_rooms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load(filename: impl AsRef<Path>) -> Result<Self> {
        let filename = filename.as_ref();
        let config = fs::read_to_string(filename)
            .with_context(|| format!("failed to read config file {}", filename.display()))?;
        Self::parse(&config)
            .with_context(|| format!("failed to parse config file {}", filename.display()))
    }

    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.hotel.validate().context("invalid hotel section")?;
        Ok(config)
    }
}
