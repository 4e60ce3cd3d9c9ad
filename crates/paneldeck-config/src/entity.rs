//! Entity reference parsing and the supported entity domains.

use smol_str::SmolStr;
use thiserror::Error;

/// Entity domains a panel can reference, plus the internal `navigate`
/// domain used to jump between cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum EntityDomain {
    Scene,
    Script,
    Light,
    Switch,
    InputBoolean,
    Automation,
    Fan,
    Lock,
    Button,
    InputButton,
    InputSelect,
    Number,
    InputNumber,
    Vacuum,
    Timer,
    Person,
    Service,
    Cover,
    Sensor,
    BinarySensor,
    InputText,
    Select,
    AlarmControlPanel,
    MediaPlayer,
    Sun,
    Climate,
    Weather,
    Navigate,
}

impl EntityDomain {
    /// Parses a domain name.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "scene" => Some(Self::Scene),
            "script" => Some(Self::Script),
            "light" => Some(Self::Light),
            "switch" => Some(Self::Switch),
            "input_boolean" => Some(Self::InputBoolean),
            "automation" => Some(Self::Automation),
            "fan" => Some(Self::Fan),
            "lock" => Some(Self::Lock),
            "button" => Some(Self::Button),
            "input_button" => Some(Self::InputButton),
            "input_select" => Some(Self::InputSelect),
            "number" => Some(Self::Number),
            "input_number" => Some(Self::InputNumber),
            "vacuum" => Some(Self::Vacuum),
            "timer" => Some(Self::Timer),
            "person" => Some(Self::Person),
            "service" => Some(Self::Service),
            "cover" => Some(Self::Cover),
            "sensor" => Some(Self::Sensor),
            "binary_sensor" => Some(Self::BinarySensor),
            "input_text" => Some(Self::InputText),
            "select" => Some(Self::Select),
            "alarm_control_panel" => Some(Self::AlarmControlPanel),
            "media_player" => Some(Self::MediaPlayer),
            "sun" => Some(Self::Sun),
            "climate" => Some(Self::Climate),
            "weather" => Some(Self::Weather),
            "navigate" => Some(Self::Navigate),
            _ => None,
        }
    }

    /// Returns the canonical domain name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scene => "scene",
            Self::Script => "script",
            Self::Light => "light",
            Self::Switch => "switch",
            Self::InputBoolean => "input_boolean",
            Self::Automation => "automation",
            Self::Fan => "fan",
            Self::Lock => "lock",
            Self::Button => "button",
            Self::InputButton => "input_button",
            Self::InputSelect => "input_select",
            Self::Number => "number",
            Self::InputNumber => "input_number",
            Self::Vacuum => "vacuum",
            Self::Timer => "timer",
            Self::Person => "person",
            Self::Service => "service",
            Self::Cover => "cover",
            Self::Sensor => "sensor",
            Self::BinarySensor => "binary_sensor",
            Self::InputText => "input_text",
            Self::Select => "select",
            Self::AlarmControlPanel => "alarm_control_panel",
            Self::MediaPlayer => "media_player",
            Self::Sun => "sun",
            Self::Climate => "climate",
            Self::Weather => "weather",
            Self::Navigate => "navigate",
        }
    }
}

impl std::fmt::Display for EntityDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error produced when an entity reference fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityRefError {
    /// The reference was empty.
    #[error("entity id is empty")]
    Empty,

    /// No `.` separator between domain and name.
    #[error("entity id '{0}' is missing the '.' between domain and name")]
    MissingSeparator(SmolStr),

    /// The domain portion is not a supported domain.
    #[error("unknown entity domain '{0}'")]
    UnknownDomain(SmolStr),

    /// The name portion contains characters outside letters, digits and
    /// underscores.
    #[error("invalid entity name '{0}'")]
    InvalidName(SmolStr),

    /// Inline text containing the reserved `~` character.
    #[error("inline text must not contain '~'")]
    TildeInText,
}

/// A parsed entity reference.
///
/// References take one of three forms: the literal `delete` (an empty
/// placeholder slot), `iText.<text>` (inline static text), or
/// `<domain>.<name>` pointing at an external entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityRef {
    /// The `delete` placeholder.
    Delete,
    /// Inline static text.
    Text(SmolStr),
    /// Reference to an external entity.
    Entity {
        /// The entity's domain.
        domain: EntityDomain,
        /// The name portion after the separator.
        name: SmolStr,
    },
}

impl EntityRef {
    /// The placeholder reference.
    pub const DELETE: &'static str = "delete";
    /// Prefix marking inline text references.
    pub const TEXT_PREFIX: &'static str = "iText.";

    /// Parses an entity id string.
    pub fn parse(text: &str) -> Result<Self, EntityRefError> {
        if text.is_empty() {
            return Err(EntityRefError::Empty);
        }
        if text == Self::DELETE {
            return Ok(Self::Delete);
        }
        if let Some(literal) = text.strip_prefix(Self::TEXT_PREFIX) {
            if literal.contains('~') {
                return Err(EntityRefError::TildeInText);
            }
            return Ok(Self::Text(SmolStr::new(literal)));
        }

        let Some((domain_str, name)) = text.split_once('.') else {
            return Err(EntityRefError::MissingSeparator(SmolStr::new(text)));
        };
        let Some(domain) = EntityDomain::parse(domain_str) else {
            return Err(EntityRefError::UnknownDomain(SmolStr::new(domain_str)));
        };
        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return Err(EntityRefError::InvalidName(SmolStr::new(name)));
        }

        Ok(Self::Entity {
            domain,
            name: SmolStr::new(name),
        })
    }

    /// Returns the domain for an external entity reference.
    #[must_use]
    pub fn domain(&self) -> Option<EntityDomain> {
        match self {
            Self::Entity { domain, .. } => Some(*domain),
            Self::Delete | Self::Text(_) => None,
        }
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Delete => f.write_str(Self::DELETE),
            Self::Text(text) => write!(f, "{}{text}", Self::TEXT_PREFIX),
            Self::Entity { domain, name } => write!(f, "{domain}.{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entity() {
        assert_eq!(
            EntityRef::parse("light.living_room_1").unwrap(),
            EntityRef::Entity {
                domain: EntityDomain::Light,
                name: SmolStr::new("living_room_1"),
            }
        );
        assert_eq!(
            EntityRef::parse("binary_sensor.door").unwrap().domain(),
            Some(EntityDomain::BinarySensor)
        );
        assert_eq!(
            EntityRef::parse("navigate.page_2").unwrap().domain(),
            Some(EntityDomain::Navigate)
        );
    }

    #[test]
    fn test_parse_sentinels() {
        assert_eq!(EntityRef::parse("delete").unwrap(), EntityRef::Delete);
        assert_eq!(
            EntityRef::parse("iText.Hello world").unwrap(),
            EntityRef::Text(SmolStr::new("Hello world"))
        );
        assert_eq!(
            EntityRef::parse("iText.").unwrap(),
            EntityRef::Text(SmolStr::default())
        );
        assert!(EntityRef::parse("delete").unwrap().domain().is_none());
    }

    #[test]
    fn test_parse_rejects() {
        assert!(matches!(
            EntityRef::parse(""),
            Err(EntityRefError::Empty)
        ));
        assert!(matches!(
            EntityRef::parse("light"),
            Err(EntityRefError::MissingSeparator(_))
        ));
        assert!(matches!(
            EntityRef::parse("blender.kitchen"),
            Err(EntityRefError::UnknownDomain(_))
        ));
        assert!(matches!(
            EntityRef::parse("light."),
            Err(EntityRefError::InvalidName(_))
        ));
        assert!(matches!(
            EntityRef::parse("light.living room"),
            Err(EntityRefError::InvalidName(_))
        ));
        assert!(matches!(
            EntityRef::parse("iText.no~tilde"),
            Err(EntityRefError::TildeInText)
        ));
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["delete", "iText.Front door", "sensor.hallway_temp"] {
            assert_eq!(EntityRef::parse(text).unwrap().to_string(), text);
        }
    }
}
