//! Declarations elm-css has no structural constructor for.
//!
//! Anything listed here is emitted through `Css.property` instead of a typed
//! constructor. Keep the built-in table small: every entry is a place where
//! the generated module loses type safety.

use elmcss_common::CommonResult;
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Properties whose literal `0` stays unitless (`Css.int 0`) instead of
/// becoming `Css.px 0`.
pub const ZERO_UNITLESS_PROPERTIES: &[&str] = &[
    "opacity",
    "flex-shrink",
    "flex-grow",
    "flex",
    "order",
    "outline",
    "z-index",
];

/// Whether a literal `0` for this property must stay a plain number
pub fn is_zero_unitless(property: &str) -> bool {
    ZERO_UNITLESS_PROPERTIES.contains(&property)
}

const EXEMPT_ALL: &[&str] = &[
    "appearance",
    // Tailwind's shadows don't map onto the multi-argument elm-css version
    "box-shadow",
    "background-position",
    "clip",
    // flex3 takes its arguments in a different order
    "flex",
    "align-content",
    "font-family",
    "content",
    "object-fit",
    "object-position",
    "clear",
    "stroke-width",
    "stroke",
    "transform-origin",
    "word-break",
    "user-select",
    "float",
    "-webkit-overflow-scrolling",
    "-webkit-font-smoothing",
    "-moz-osx-font-smoothing",
];

const EXEMPT_VALUES: &[(&str, &[&str])] = &[
    ("display", &["flow-root", "inline-grid", "grid"]),
    ("align-self", &["auto"]),
    ("justify-content", &["space-evenly"]),
    ("cursor", &["text"]),
    // needs an explicit `none`
    ("outline", &["0"]),
];

/// How much of a property is exempt from structural translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exemption {
    /// Every value of the property
    All,
    /// Only these exact values
    Values(BTreeSet<String>),
}

impl Exemption {
    pub fn values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Exemption::Values(values.into_iter().map(Into::into).collect())
    }

    pub fn covers(&self, value: &str) -> bool {
        match self {
            Exemption::All => true,
            Exemption::Values(values) => values.contains(value),
        }
    }
}

// JSON shape: "*" for every value, or an array of literal values.
impl Serialize for Exemption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Exemption::All => serializer.serialize_str("*"),
            Exemption::Values(values) => values.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Exemption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExemptionVisitor;

        impl<'de> Visitor<'de> for ExemptionVisitor {
            type Value = Exemption;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("\"*\" or an array of values")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Exemption, E> {
                if v == "*" {
                    Ok(Exemption::All)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Exemption, A::Error> {
                let mut values = BTreeSet::new();
                while let Some(value) = seq.next_element::<String>()? {
                    values.insert(value);
                }
                Ok(Exemption::Values(values))
            }
        }

        deserializer.deserialize_any(ExemptionVisitor)
    }
}

/// Property name → exemption. Read-only once handed to a transpiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExemptionTable {
    entries: HashMap<String, Exemption>,
}

impl ExemptionTable {
    /// A table that exempts nothing
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Parse a JSON object such as `{"float": "*", "cursor": ["text"]}`
    pub fn from_json_str(json: &str) -> CommonResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, property: impl Into<String>, exemption: Exemption) {
        self.entries.insert(property.into(), exemption);
    }

    pub fn with(mut self, property: impl Into<String>, exemption: Exemption) -> Self {
        self.insert(property, exemption);
        self
    }

    /// Layer `overrides` on top of this table. An override replaces the whole
    /// entry for its property.
    pub fn extend(&mut self, overrides: ExemptionTable) {
        self.entries.extend(overrides.entries);
    }

    pub fn get(&self, property: &str) -> Option<&Exemption> {
        self.entries.get(property)
    }

    pub fn is_exempt(&self, property: &str, value: &str) -> bool {
        self.entries
            .get(property)
            .map(|exemption| exemption.covers(value))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ExemptionTable {
    /// The built-in table of declarations elm-css can't express directly
    fn default() -> Self {
        let mut table = Self::empty();
        for property in EXEMPT_ALL {
            table.insert(*property, Exemption::All);
        }
        for (property, values) in EXEMPT_VALUES {
            table.insert(*property, Exemption::values(values.iter().copied()));
        }
        table
    }
}
