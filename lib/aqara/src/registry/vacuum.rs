use super::Table;
use crate::vacuum::{ECOVACS, STONE};
use crate::{Capability, Descriptor};

const ECOVACS_VACUUM: Descriptor = Descriptor {
    icon: Some("mdi:robot-vacuum"),
    ..Descriptor::new("14.29.85", "Vacuum", Capability::Vacuum(&ECOVACS))
};

// keyed on the mode point, stone devices have no 14.29.85
const STONE_VACUUM: Descriptor = Descriptor {
    icon: Some("mdi:robot-vacuum"),
    ..Descriptor::new("14.47.85", "Vacuum", Capability::Vacuum(&STONE))
};

pub(super) const TABLE: Table = &[
    (
        &[
            "aqara.swe_rob.decn01",
            "aqara.swe_rob.decn02",
            "aqara.swe_rob.decn04",
            "aqara.swe_rob.decn05",
        ],
        &[ECOVACS_VACUUM],
    ),
    (
        &[
            "aqara.swe_rob.stcn01",
            "aqara.swe_rob.stcn02",
            "miot.rockrobo_vacuum.v1",
        ],
        &[STONE_VACUUM],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode_enum;
    use crate::VacuumStatus;

    #[test]
    fn test_stone_status() {
        let Capability::Vacuum(profile) = STONE_VACUUM.capability else {
            panic!("stone vacuum without profile");
        };

        assert_eq!(
            decode_enum(Some("2"), profile.status_map),
            Some(VacuumStatus::Cleaning)
        );
        assert_eq!(decode_enum(Some("8"), profile.status_map), None);
    }
}
