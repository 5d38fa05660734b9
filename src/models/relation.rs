//! Typed view of one `A --> B --> C` discovery fact.

use crate::config::TRIPLE_SEPARATOR;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Entity kind carried by the trailing `(Kind)` tag of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Asn,
    RirOrganization,
    Netblock,
    Fqdn,
    IpAddress,
}

impl Kind {
    /// Tag text as it appears inside the parentheses.
    pub fn tag(&self) -> &'static str {
        match self {
            Kind::Asn => "ASN",
            Kind::RirOrganization => "RIROrganization",
            Kind::Netblock => "Netblock",
            Kind::Fqdn => "FQDN",
            Kind::IpAddress => "IPAddress",
        }
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASN" => Ok(Kind::Asn),
            "RIROrganization" => Ok(Kind::RirOrganization),
            "Netblock" => Ok(Kind::Netblock),
            "FQDN" => Ok(Kind::Fqdn),
            "IPAddress" => Ok(Kind::IpAddress),
            other => Err(format!("Unknown entity kind: {other}")),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

lazy_static! {
    static ref TAGGED_SEGMENT: Regex =
        Regex::new(r"^(?P<label>.*\S)\s+\((?P<kind>[A-Za-z]+)\)$").expect("Invalid Regex?");
}

/// One side of a relation: the label with its tag stripped.
///
/// `kind` is `None` when the segment has no tag or an unknown one; the label
/// is then the whole trimmed segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub label: String,
    pub kind: Option<Kind>,
}

impl Entity {
    pub fn new(label: &str, kind: Kind) -> Entity {
        Entity {
            label: label.to_string(),
            kind: Some(kind),
        }
    }

    /// Split a segment such as `example.com (FQDN)` into label and kind.
    pub fn parse(segment: &str) -> Entity {
        let segment = segment.trim();
        if let Some(caps) = TAGGED_SEGMENT.captures(segment) {
            if let Ok(kind) = caps["kind"].parse::<Kind>() {
                return Entity {
                    label: caps["label"].to_string(),
                    kind: Some(kind),
                };
            }
        }
        Entity {
            label: segment.to_string(),
            kind: None,
        }
    }

    pub fn is(&self, kind: Kind) -> bool {
        self.kind == Some(kind)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Some(kind) => write!(f, "{} ({})", self.label, kind),
            None => write!(f, "{}", self.label),
        }
    }
}

/// A parsed fact. Only the first and third segments carry meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub left: Entity,
    pub predicate: String,
    pub right: Entity,
}

impl Relation {
    /// Parse a text fact, `None` if it has fewer than three segments.
    pub fn parse(line: &str) -> Option<Relation> {
        let parts: Vec<&str> = line.split(TRIPLE_SEPARATOR).collect();
        if parts.len() < 3 {
            return None;
        }
        Some(Relation {
            left: Entity::parse(parts[0]),
            predicate: parts[1].trim().to_string(),
            right: Entity::parse(parts[2]),
        })
    }
}
