//! Domain models that mirror the `elements` table and get passed throughout
//! the TUI. These stay plain data holders; decoding from SQLite lives next to
//! them so the column layout and the struct never drift apart.

use std::fmt;
use std::str::FromStr;

use rusqlite::types::Type;
use rusqlite::Row;
use thiserror::Error;

/// Group number used for the detached lanthanide row.
pub const LANTHANIDE_GROUP: i64 = 19;
/// Group number used for the detached actinide row.
pub const ACTINIDE_GROUP: i64 = 20;

/// Last atomic number of each period.
const PERIOD_ENDS: [i64; 7] = [2, 10, 18, 36, 54, 86, 118];

/// Stored value meaning "no measurement" for melting and boiling points.
const NO_TEMPERATURE: f64 = 0.0;

#[derive(Debug, Error)]
#[error("unrecognized element family `{0}`")]
pub struct UnknownFamily(pub String);

#[derive(Debug, Error)]
#[error("unrecognized phase code {0}")]
pub struct UnknownPhase(pub i64);

/// Classification used for styling and the family badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Nonmetal,
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    NobleGas,
    Metalloid,
    Radioactive,
    Lanthanide,
    Actinide,
}

impl Family {
    pub const ALL: [Family; 10] = [
        Family::Nonmetal,
        Family::AlkaliMetal,
        Family::AlkalineEarthMetal,
        Family::TransitionMetal,
        Family::PostTransitionMetal,
        Family::NobleGas,
        Family::Metalloid,
        Family::Radioactive,
        Family::Lanthanide,
        Family::Actinide,
    ];

    /// Label exactly as stored in the `family` column.
    pub fn label(self) -> &'static str {
        match self {
            Family::Nonmetal => "Nonmetal",
            Family::AlkaliMetal => "Alkali Metal",
            Family::AlkalineEarthMetal => "Alkaline Earth Metal",
            Family::TransitionMetal => "Transition Metal",
            Family::PostTransitionMetal => "Post-Transition Metal",
            Family::NobleGas => "Noble Gas",
            Family::Metalloid => "Metalloid",
            Family::Radioactive => "Radioactive",
            Family::Lanthanide => "Lanthanide",
            Family::Actinide => "Actinide",
        }
    }
}

impl FromStr for Family {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Family::ALL
            .into_iter()
            .find(|family| family.label() == s)
            .ok_or_else(|| UnknownFamily(s.to_string()))
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Physical state at room temperature, stored as a small integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
    /// Synthetic elements nobody has collected enough of to observe.
    Unknown,
}

impl Phase {
    pub fn from_code(code: i64) -> Result<Self, UnknownPhase> {
        match code {
            0 => Ok(Phase::Solid),
            1 => Ok(Phase::Liquid),
            2 => Ok(Phase::Gas),
            3 => Ok(Phase::Unknown),
            other => Err(UnknownPhase(other)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Solid => "Solid",
            Phase::Liquid => "Liquid",
            Phase::Gas => "Gas",
            Phase::Unknown => "Unknown",
        }
    }
}

/// Artwork attached to an element. The file suffix decides how it is shown:
/// `.usdz` files are 3D models, everything else is a flat picture that gets
/// tinted with the element's colour channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    Model(String),
    Picture(String),
}

impl Asset {
    pub fn from_file_name(name: String) -> Self {
        if name.ends_with(".usdz") {
            Asset::Model(name)
        } else {
            Asset::Picture(name)
        }
    }

    pub fn file_name(&self) -> &str {
        match self {
            Asset::Model(name) | Asset::Picture(name) => name,
        }
    }
}

/// RGB multiplier applied to the shared placeholder picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// One row of the `elements` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Atomic number. Doubles as the primary key.
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub desc: String,
    pub state: Phase,
    /// Degrees Celsius.
    pub melting: Option<f64>,
    /// Degrees Celsius.
    pub boiling: Option<f64>,
    /// Table column 1..=18, or one of the detached f-block rows.
    pub group: i64,
    pub family: Family,
    pub mass: f64,
    pub image: Option<Asset>,
    /// Raw colour channels, in the order they were stored.
    pub colors: Option<Vec<String>>,
}

impl Element {
    /// Column list shared by every query so `from_row` can decode by position.
    /// `desc` and `groups` are SQL keywords, hence the quoting.
    pub const COLUMNS: &'static str = r#"id, name, symbol, "desc", state, melting, boiling, colors, image, "groups", family, mass"#;

    /// Decode a row selected with [`Element::COLUMNS`]. Required columns fail
    /// loudly; only melting, boiling, image and colors may be absent.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let state_code: i64 = row.get(4)?;
        let state = Phase::from_code(state_code)
            .map_err(|err| rusqlite::Error::FromSqlConversionFailure(4, Type::Integer, Box::new(err)))?;

        let family_text: String = row.get(10)?;
        let family = family_text
            .parse::<Family>()
            .map_err(|err| rusqlite::Error::FromSqlConversionFailure(10, Type::Text, Box::new(err)))?;

        let colors: Option<String> = row.get(7)?;
        let image: Option<String> = row.get(8)?;

        Ok(Element {
            id: row.get(0)?,
            name: row.get(1)?,
            symbol: row.get(2)?,
            desc: row.get(3)?,
            state,
            melting: measured(row.get(5)?),
            boiling: measured(row.get(6)?),
            colors: colors.map(|text| split_channels(&text)),
            image: image.map(Asset::from_file_name),
            group: row.get(9)?,
            family,
            mass: row.get(11)?,
        })
    }

    /// Parse the stored channels into a tint. Anything other than exactly
    /// three values in 0..=255 yields `None`.
    pub fn tint(&self) -> Option<Tint> {
        let channels = self.colors.as_ref()?;
        if channels.len() != 3 {
            return None;
        }
        let mut parsed = [0u8; 3];
        for (slot, raw) in parsed.iter_mut().zip(channels) {
            *slot = raw.trim().parse().ok()?;
        }
        Some(Tint {
            r: parsed[0],
            g: parsed[1],
            b: parsed[2],
        })
    }

    pub fn is_halogen(&self) -> bool {
        self.group == 17
    }

    /// Actinides get an extra "Radioactive" badge beside the family one.
    pub fn is_radioactive_badge(&self) -> bool {
        self.family == Family::Actinide
    }

    pub fn period(&self) -> Option<u8> {
        period_of(self.id)
    }

    /// Atomic mass cut to five characters, the way the detail card shows it.
    /// Whole masses keep their `.0`.
    pub fn mass_label(&self) -> String {
        format!("{:?}", self.mass).chars().take(5).collect()
    }

    pub fn has_temperatures(&self) -> bool {
        self.melting.is_some() || self.boiling.is_some()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Period (table row) for an atomic number, if it is a known element.
pub fn period_of(id: i64) -> Option<u8> {
    if id < 1 {
        return None;
    }
    PERIOD_ENDS
        .iter()
        .position(|&end| id <= end)
        .map(|idx| idx as u8 + 1)
}

fn measured(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != NO_TEMPERATURE)
}

fn split_channels(text: &str) -> Vec<String> {
    text.split(", ").map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element {
            id: 26,
            name: "Iron".into(),
            symbol: "Fe".into(),
            desc: "Iron is a metal.".into(),
            state: Phase::Solid,
            melting: Some(1538.0),
            boiling: Some(2862.0),
            group: 8,
            family: Family::TransitionMetal,
            mass: 55.845,
            image: Some(Asset::Picture("metal.png".into())),
            colors: Some(vec!["183".into(), "65".into(), "14".into()]),
        }
    }

    #[test]
    fn family_labels_round_trip() {
        for family in Family::ALL {
            assert_eq!(family.label().parse::<Family>().unwrap(), family);
        }
        assert!("Halogen".parse::<Family>().is_err());
    }

    #[test]
    fn period_boundaries() {
        assert_eq!(period_of(1), Some(1));
        assert_eq!(period_of(2), Some(1));
        assert_eq!(period_of(3), Some(2));
        assert_eq!(period_of(57), Some(6));
        assert_eq!(period_of(118), Some(7));
        assert_eq!(period_of(0), None);
        assert_eq!(period_of(119), None);
    }

    #[test]
    fn asset_kind_follows_suffix() {
        assert!(matches!(Asset::from_file_name("gold.usdz".into()), Asset::Model(_)));
        assert!(matches!(Asset::from_file_name("gas.png".into()), Asset::Picture(_)));
    }

    #[test]
    fn tint_requires_three_channels() {
        let mut element = sample();
        assert_eq!(element.tint(), Some(Tint { r: 183, g: 65, b: 14 }));

        element.colors = Some(vec!["1".into(), "2".into()]);
        assert_eq!(element.tint(), None);

        element.colors = Some(vec!["1".into(), "x".into(), "3".into()]);
        assert_eq!(element.tint(), None);
    }

    #[test]
    fn mass_label_is_five_chars() {
        assert_eq!(sample().mass_label(), "55.84");

        let mut whole = sample();
        whole.mass = 289.0;
        assert_eq!(whole.mass_label(), "289.0");
        whole.mass = 1.008;
        assert_eq!(whole.mass_label(), "1.008");
    }

    #[test]
    fn zero_means_unmeasured() {
        assert_eq!(measured(Some(0.0)), None);
        assert_eq!(measured(None), None);
        assert_eq!(measured(Some(-38.83)), Some(-38.83));
    }
}
