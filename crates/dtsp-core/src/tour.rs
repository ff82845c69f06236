use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::Vertex;

/// A cost together with the order the vertices were visited in. The closing
/// hop back to vertex 1 is priced into `cost` but not repeated in `order`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub cost: f64,
    pub order: Vec<Vertex>,
}

impl Tour {
    pub fn new(cost: f64, order: Vec<Vertex>) -> Self {
        Self { cost, order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cost = {:.1}, visitOrder = {}",
            self.cost,
            format_order(&self.order)
        )
    }
}

/// `[1, 2, 3]`
pub fn format_order(order: &[Vertex]) -> String {
    let items: Vec<String> = order.iter().map(Vertex::to_string).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rounds_to_one_decimal() {
        let tour = Tour::new(40.04, vec![1, 2, 3, 4]);
        assert_eq!(tour.to_string(), "cost = 40.0, visitOrder = [1, 2, 3, 4]");
        assert_eq!(format_order(&[]), "[]");
    }

    #[test]
    fn serializes_as_plain_object() {
        let tour = Tour::new(12.5, vec![1, 3, 2]);
        let json = serde_json::to_string(&tour).unwrap();
        assert_eq!(json, r#"{"cost":12.5,"order":[1,3,2]}"#);
    }
}
