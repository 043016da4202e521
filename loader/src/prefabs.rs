//! Prefabricated planets.
//! Each one is a function that puts the planet somewhere.

use euclid::default::Point2D;
use simulator::bodies::Planet;
use std::collections::HashMap;

/// The big blue one in the middle of the default sandbox.
pub fn cobalt(pos: Point2D<f64>) -> Planet {
    Planet::new(pos, 20000.0, 40.0, 0x5a64ff)
}

/// The smaller rusty one off to the side.
pub fn ember(pos: Point2D<f64>) -> Planet {
    Planet::new(pos, 8000.0, 28.0, 0xc87850)
}

/// Light, pale and easy to slingshot around.
pub fn frost(pos: Point2D<f64>) -> Planet {
    Planet::new(pos, 3000.0, 16.0, 0xbfe6ff)
}

/// Dense for its size. Watch out.
pub fn cinder(pos: Point2D<f64>) -> Planet {
    Planet::new(pos, 18000.0, 14.0, 0xff5c26)
}

pub fn moss(pos: Point2D<f64>) -> Planet {
    Planet::new(pos, 11000.0, 34.0, 0x6fbf5a)
}

type Maker = fn(Point2D<f64>) -> Planet;

macro_rules! maker {
    (
        $($name:ident),*
    ) => {
        {
            let mut h: HashMap<&'static str, Maker> = HashMap::new();
            $( h.insert(stringify!($name), $name as Maker); )*
            h
        }
    };
}

lazy_static! {
    static ref PLANETS: HashMap<&'static str, Maker> = maker![cobalt, ember, frost, cinder, moss];
}

/// Gets a premade planet by name
pub fn get(id: &str) -> Option<Maker> {
    PLANETS.get(id).copied()
}

/// Every prefab name, sorted
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = PLANETS.keys().copied().collect();
    names.sort();
    names
}
