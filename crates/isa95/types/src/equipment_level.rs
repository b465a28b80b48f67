use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ISA95EquipmentElementLevelEnum: the role of an equipment element in the
/// enterprise hierarchy.
///
/// Discriminants are the enumeration values stored in `EquipmentLevel`
/// attributes (as `Int32`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum EquipmentLevel {
    Enterprise = 0,
    Site = 1,
    Area = 2,
    ProcessCell = 3,
    Unit = 4,
    ProductionLine = 5,
    WorkCell = 6,
    ProductionUnit = 7,
    StorageZone = 8,
    StorageUnit = 9,
    WorkCenter = 10,
    WorkUnit = 11,
    EquipmentModule = 12,
    ControlModule = 13,
    Other = 14,
}

impl EquipmentLevel {
    pub const ALL: [EquipmentLevel; 15] = [
        Self::Enterprise,
        Self::Site,
        Self::Area,
        Self::ProcessCell,
        Self::Unit,
        Self::ProductionLine,
        Self::WorkCell,
        Self::ProductionUnit,
        Self::StorageZone,
        Self::StorageUnit,
        Self::WorkCenter,
        Self::WorkUnit,
        Self::EquipmentModule,
        Self::ControlModule,
        Self::Other,
    ];

    pub fn value(self) -> i32 {
        self as i32
    }

    pub fn from_value(value: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.value() == value)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Enterprise => "Enterprise",
            Self::Site => "Site",
            Self::Area => "Area",
            Self::ProcessCell => "ProcessCell",
            Self::Unit => "Unit",
            Self::ProductionLine => "ProductionLine",
            Self::WorkCell => "WorkCell",
            Self::ProductionUnit => "ProductionUnit",
            Self::StorageZone => "StorageZone",
            Self::StorageUnit => "StorageUnit",
            Self::WorkCenter => "WorkCenter",
            Self::WorkUnit => "WorkUnit",
            Self::EquipmentModule => "EquipmentModule",
            Self::ControlModule => "ControlModule",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for EquipmentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<i32> for EquipmentLevel {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| format!("Unknown equipment level value: {}", value))
    }
}

impl FromStr for EquipmentLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown equipment level: {}", s))
    }
}
