use super::error::TableError;
use serde_json::Value;

///
/// A weight table that has passed validation and is safe to roll against.
///
/// Construction is the validation step: every `WeightedTable` is non-empty,
/// and every weight is finite and strictly greater than zero. Duplicate
/// labels are kept as distinct outcomes with their own weights rather than
/// merged.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedTable<T> {
    entries: Vec<(T, f64)>,
}

impl<T> WeightedTable<T> {
    pub fn new(entries: Vec<(T, f64)>) -> Result<WeightedTable<T>, TableError> {
        if entries.is_empty() {
            return Err(TableError::EmptyTable);
        }
        for (index, (_, weight)) in entries.iter().enumerate() {
            if !weight.is_finite() {
                return Err(TableError::NonNumericWeight { index });
            }
            if *weight <= 0.0 {
                return Err(TableError::NonPositiveWeight {
                    index,
                    weight: *weight,
                });
            }
        }
        Ok(WeightedTable { entries })
    }

    pub fn entries(&self) -> &[(T, f64)] {
        &self.entries
    }

    /// Sum of the weights, accumulated in entry order. Rolls draw against the
    /// same left-to-right running sum, so the walk can't disagree with the
    /// total it draws under.
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|(_, weight)| weight).sum()
    }
}

impl WeightedTable<String> {
    /// Builds a table from loosely shaped records, like the `table` array of
    /// a config file. Each record must be a two element `[label, weight]`
    /// array with a string label and a numeric weight.
    pub fn from_records(records: &[Value]) -> Result<WeightedTable<String>, TableError> {
        if records.is_empty() {
            return Err(TableError::EmptyTable);
        }
        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let pair = match record.as_array() {
                Some(pair) if pair.len() == 2 => pair,
                _ => return Err(TableError::MalformedEntry { index }),
            };
            let label = match pair[0].as_str() {
                Some(label) => label.to_string(),
                None => return Err(TableError::MalformedEntry { index }),
            };
            let weight = match pair[1].as_f64() {
                Some(weight) => weight,
                None => return Err(TableError::NonNumericWeight { index }),
            };
            entries.push((label, weight));
        }
        WeightedTable::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(
            WeightedTable::<String>::new(vec![]),
            Err(TableError::EmptyTable)
        );
    }

    #[test]
    fn test_zero_weight_rejected() {
        assert_eq!(
            WeightedTable::new(vec![("x".to_string(), 0.0)]),
            Err(TableError::NonPositiveWeight {
                index: 0,
                weight: 0.0
            })
        );
    }

    #[test]
    fn test_negative_weight_rejected() {
        assert_eq!(
            WeightedTable::new(vec![("x".to_string(), -1.0)]),
            Err(TableError::NonPositiveWeight {
                index: 0,
                weight: -1.0
            })
        );
    }

    #[test]
    fn test_nan_weight_rejected() {
        assert_eq!(
            WeightedTable::new(vec![("x".to_string(), f64::NAN)]),
            Err(TableError::NonNumericWeight { index: 0 })
        );
    }

    #[test]
    fn test_infinite_weight_rejected() {
        assert_eq!(
            WeightedTable::new(vec![("x".to_string(), f64::INFINITY)]),
            Err(TableError::NonNumericWeight { index: 0 })
        );
    }

    #[test]
    fn test_first_bad_entry_wins() {
        let result = WeightedTable::new(vec![
            ("a".to_string(), 1.0),
            ("b".to_string(), -2.0),
            ("c".to_string(), f64::NAN),
        ]);
        assert_eq!(
            result,
            Err(TableError::NonPositiveWeight {
                index: 1,
                weight: -2.0
            })
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let entries = vec![("lion".to_string(), 1.0), ("tiger".to_string(), 5.0)];
        let table = WeightedTable::new(entries.clone()).unwrap();
        let revalidated = WeightedTable::new(table.entries().to_vec()).unwrap();
        assert_eq!(revalidated.entries(), entries.as_slice());
    }

    #[test]
    fn test_duplicate_labels_stay_distinct() {
        let table =
            WeightedTable::new(vec![("x".to_string(), 1.0), ("x".to_string(), 2.0)]).unwrap();
        assert_eq!(table.entries().len(), 2);
        assert_eq!(table.total_weight(), 3.0);
    }

    #[test]
    fn test_records_build_a_table() {
        let records = json!([["lion", 1.0], ["tiger", 5.0], ["bear", 1.5]]);
        let table = WeightedTable::from_records(records.as_array().unwrap()).unwrap();
        assert_eq!(
            table.entries(),
            &[
                ("lion".to_string(), 1.0),
                ("tiger".to_string(), 5.0),
                ("bear".to_string(), 1.5)
            ]
        );
    }

    #[test]
    fn test_record_with_wrong_arity_rejected() {
        let records = json!([["lion", 1.0], ["tiger"]]);
        assert_eq!(
            WeightedTable::from_records(records.as_array().unwrap()),
            Err(TableError::MalformedEntry { index: 1 })
        );
    }

    #[test]
    fn test_record_that_is_not_a_pair_rejected() {
        let records = json!(["lion"]);
        assert_eq!(
            WeightedTable::from_records(records.as_array().unwrap()),
            Err(TableError::MalformedEntry { index: 0 })
        );
    }

    #[test]
    fn test_record_with_non_string_label_rejected() {
        let records = json!([[1.0, 1.0]]);
        assert_eq!(
            WeightedTable::from_records(records.as_array().unwrap()),
            Err(TableError::MalformedEntry { index: 0 })
        );
    }

    #[test]
    fn test_record_with_non_numeric_weight_rejected() {
        let records = json!([["lion", "not-a-number"]]);
        assert_eq!(
            WeightedTable::from_records(records.as_array().unwrap()),
            Err(TableError::NonNumericWeight { index: 0 })
        );
    }

    #[test]
    fn test_no_records_rejected() {
        assert_eq!(
            WeightedTable::from_records(&[]),
            Err(TableError::EmptyTable)
        );
    }
}
