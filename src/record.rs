//! The record being copied: a cat with scalar fields, nested structs, a map
//! of eyes and a vector of leg lengths.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::shared::Shared;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Black,
    Green,
    Blue,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Black => "black",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        f.write_str(name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Eye {
    pub colors: Color,
}

impl Eye {
    pub fn new(colors: Color) -> Self {
        Eye { colors }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Tail {
    pub length: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Legs {
    pub count: u32,
    pub length: Shared<Vec<i32>>,
}

/// `Clone` is the shallow copy: `eye` and `leg.length` keep pointing at the
/// original storage. Use [`crate::DeepCopier`] for an independent copy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Cat {
    pub name: String,
    pub age: u32,
    pub leg: Legs,
    pub eye: Shared<HashMap<String, Eye>>,
    pub tail: Tail,
}

impl Cat {
    pub fn tom() -> Self {
        let eye = HashMap::from([
            ("left".to_string(), Eye::new(Color::Black)),
            ("right".to_string(), Eye::new(Color::Green)),
        ]);
        Cat {
            name: "tom".to_string(),
            age: 1,
            leg: Legs {
                count: 4,
                length: Shared::new(vec![10, 10, 10, 10]),
            },
            eye: Shared::new(eye),
            tail: Tail { length: 123.45 },
        }
    }

    pub fn eye_color(&self, side: &str) -> Option<Color> {
        self.eye.borrow().get(side).map(|eye| eye.colors)
    }

    pub fn set_eye(&self, side: &str, colors: Color) {
        self.eye.borrow_mut().insert(side.to_string(), Eye::new(colors));
    }

    pub fn leg_length(&self, index: usize) -> Option<i32> {
        self.leg.length.borrow().get(index).copied()
    }

    /// Returns false when `index` is out of bounds.
    pub fn set_leg_length(&self, index: usize, value: i32) -> bool {
        self.leg.length.with_mut(|lengths| match lengths.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        })
    }

    /// True when any map or vector storage is reachable from both cats.
    pub fn shares_storage_with(&self, other: &Cat) -> bool {
        self.eye.ptr_eq(&other.eye) || self.leg.length.ptr_eq(&other.leg.length)
    }
}

impl fmt::Display for Eye {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.colors)
    }
}

impl fmt::Display for Tail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.length)
    }
}

impl fmt::Display for Legs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lengths = self.length.borrow();
        let joined = lengths
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{{{} [{}]}}", self.count, joined)
    }
}

impl fmt::Display for Cat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let eyes = self.eye.borrow();
        let mut sides: Vec<_> = eyes.iter().collect();
        sides.sort_by(|a, b| a.0.cmp(b.0));
        let eyes = sides
            .iter()
            .map(|(side, eye)| format!("{side}:{eye}"))
            .collect::<Vec<_>>()
            .join(" ");
        write!(
            f,
            "{{{} {} {} map[{}] {}}}",
            self.name, self.age, self.leg, eyes, self.tail
        )
    }
}
