//! Document persistence: the model round-trips through its canonical string.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::MatrixModel;
use crate::value::CellString;

impl Serialize for MatrixModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value())
    }
}

impl<'de> Deserialize<'de> for MatrixModel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let cells: CellString = raw.parse().map_err(D::Error::custom)?;
        Ok(MatrixModel::from(cells))
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::GridSize;
    use crate::model::MatrixModel;

    #[test]
    fn round_trips_through_the_canonical_string() {
        let mut model = MatrixModel::new();
        model.set_size(3, 4);
        model.set_value("101010101010");

        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, "\"1010:1010:1010\"");

        let back: MatrixModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back.size(), GridSize::new(3, 4));
        assert_eq!(back.value(), model.value());
    }

    #[test]
    fn rejects_corrupt_documents() {
        assert!(serde_json::from_str::<MatrixModel>("\"10x:000:000\"").is_err());
        assert!(serde_json::from_str::<MatrixModel>("\"11:11\"").is_err());
    }
}
