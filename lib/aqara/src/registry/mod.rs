//! Per-platform model tables.
//!
//! A model may appear in several platform tables, and each table maps it to
//! the ordered descriptors discovery should try against the device.

mod binary_sensor;
mod button;
mod number;
mod sensor;
mod siren;
mod switch;
mod vacuum;

use crate::{Descriptor, Platform};

type Table = &'static [(&'static [&'static str], &'static [Descriptor])];

pub fn descriptors(platform: Platform, model: &str) -> Option<&'static [Descriptor]> {
    let table = match platform {
        Platform::Sensor => sensor::TABLE,
        Platform::BinarySensor => binary_sensor::TABLE,
        Platform::Switch => switch::TABLE,
        Platform::Number => number::TABLE,
        Platform::Button => button::TABLE,
        Platform::Siren => siren::TABLE,
        Platform::Vacuum => vacuum::TABLE,
    };

    lookup(table, model)
}

fn lookup(table: Table, model: &str) -> Option<&'static [Descriptor]> {
    table
        .iter()
        .find(|(models, _)| models.contains(&model))
        .map(|(_, descriptors)| *descriptors)
}
