//! Comparator lookup by value type

use crate::column::ArraySortStrategy;
use crate::detect::ValueType;

use super::Comparator;

/// Maps value types and array strategies to comparators
pub struct ComparatorRegistry;

impl ComparatorRegistry {
    /// Returns the comparator for a scalar value type.
    pub fn get(value_type: ValueType) -> Comparator {
        match value_type {
            ValueType::Text => Comparator::Text,
            ValueType::Number => Comparator::Number,
            ValueType::Date => Comparator::Date,
            ValueType::Boolean => Comparator::Boolean,
        }
    }

    /// Returns the comparator for an array-valued column.
    pub fn get_array(strategy: &ArraySortStrategy) -> Comparator {
        match strategy {
            ArraySortStrategy::Length => Comparator::ArrayLength,
            ArraySortStrategy::UniqueBy(sub_path) => Comparator::ArrayUniqueBy(sub_path.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_lookup() {
        assert_eq!(ComparatorRegistry::get(ValueType::Text), Comparator::Text);
        assert_eq!(
            ComparatorRegistry::get(ValueType::Number),
            Comparator::Number
        );
        assert_eq!(ComparatorRegistry::get(ValueType::Date), Comparator::Date);
        assert_eq!(
            ComparatorRegistry::get(ValueType::Boolean),
            Comparator::Boolean
        );
    }

    #[test]
    fn test_array_lookup() {
        assert_eq!(
            ComparatorRegistry::get_array(&ArraySortStrategy::Length),
            Comparator::ArrayLength
        );
        assert_eq!(
            ComparatorRegistry::get_array(&ArraySortStrategy::UniqueBy("ips.name".into())),
            Comparator::ArrayUniqueBy("ips.name".to_string())
        );
    }
}
