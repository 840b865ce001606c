use serde::{Deserialize, Serialize};

/// simulator layer id for vehicles running at street level.
pub const LAYER_DEFAULT: i32 = 0;
/// simulator layer id for vehicles running underground.
pub const LAYER_UNDERGROUND: i32 = -1;

/// a transit line as read from the feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// feed route identifier
    pub id: String,
    pub transport_type: TransportType,
}

impl Route {
    pub fn new(id: &str, transport_type: TransportType) -> Self {
        Self {
            id: id.to_string(),
            transport_type,
        }
    }
}

/// transport category of a route. only the first four categories are converted,
/// everything else is kept as its raw route type code and filtered out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportType {
    Tram,
    Metro,
    Rail,
    Bus,
    Other(i16),
}

impl TransportType {
    /// decodes a GTFS `route_type` code.
    pub fn from_code(code: i16) -> Self {
        match code {
            0 => TransportType::Tram,
            1 => TransportType::Metro,
            2 => TransportType::Rail,
            3 => TransportType::Bus,
            other => TransportType::Other(other),
        }
    }

    pub fn code(&self) -> i16 {
        match self {
            TransportType::Tram => 0,
            TransportType::Metro => 1,
            TransportType::Rail => 2,
            TransportType::Bus => 3,
            TransportType::Other(code) => *code,
        }
    }

    /// true for the four categories the converter produces vehicles for.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, TransportType::Other(_))
    }

    /// rail-bound modes cannot deadhead far between two consecutive trips, so the
    /// vehicle packer applies the maximum link distance to them.
    pub fn is_rail_like(&self) -> bool {
        matches!(
            self,
            TransportType::Tram | TransportType::Metro | TransportType::Rail
        )
    }

    pub fn layer_id(&self) -> i32 {
        match self {
            TransportType::Metro => LAYER_UNDERGROUND,
            _ => LAYER_DEFAULT,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_code_round_trips_known_types() {
        for code in 0..4 {
            let tt = TransportType::from_code(code);
            assert!(tt.is_recognized());
            assert_eq!(tt.code(), code);
        }
    }

    #[test]
    fn test_unknown_codes_are_not_recognized() {
        let ferry = TransportType::from_code(4);
        assert_eq!(ferry, TransportType::Other(4));
        assert!(!ferry.is_recognized());
        assert!(!TransportType::from_code(700).is_recognized());
    }

    #[test]
    fn test_rail_like_and_layers() {
        assert!(TransportType::Tram.is_rail_like());
        assert!(TransportType::Metro.is_rail_like());
        assert!(TransportType::Rail.is_rail_like());
        assert!(!TransportType::Bus.is_rail_like());
        assert_eq!(TransportType::Metro.layer_id(), LAYER_UNDERGROUND);
        assert_eq!(TransportType::Rail.layer_id(), LAYER_DEFAULT);
        assert_eq!(TransportType::Bus.layer_id(), LAYER_DEFAULT);
    }
}
