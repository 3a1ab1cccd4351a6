use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use log::debug;

use crate::element::{ElementKind, RouteElement};
use crate::error::{Error, Result};
use crate::resolve::resolve;

/// Classified route, one element per token of the route string.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Route {
    elements: Vec<RouteElement>,
}

impl Route {
    /// Classifies every whitespace-separated token of an ICAO route string.
    ///
    /// Each token is resolved with the kind of the element before it and
    /// the token after it as context. The first failing token aborts the
    /// whole route.
    pub fn build(route: &str) -> Result<Route> {
        let tokens: Vec<&str> = route.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(Error::EmptyRoute);
        }

        let mut elements = Vec::with_capacity(tokens.len());
        let mut previous: Option<ElementKind> = None;

        for (position, &current) in tokens.iter().enumerate() {
            let next = tokens.get(position + 1).copied();
            let element = resolve(previous, current, next).map_err(|e| e.at(position))?;
            debug!("{:>3} {:<16} {}", position, current, element.kind());

            previous = Some(element.kind());
            elements.push(element);
        }

        Ok(Route { elements })
    }

    pub fn elements(&self) -> &[RouteElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteElement> {
        self.elements.iter()
    }

    pub fn kinds(&self) -> Vec<ElementKind> {
        self.elements.iter().map(RouteElement::kind).collect()
    }

    /// The route string rebuilt from its elements, single-space separated.
    pub fn representation(&self) -> String {
        self.elements.iter().join(" ")
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Route::build(s)
    }
}

impl IntoIterator for Route {
    type Item = RouteElement;
    type IntoIter = std::vec::IntoIter<RouteElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a RouteElement;
    type IntoIter = std::slice::Iter<'a, RouteElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// One `Representation is <R>, Type is <T>` line per element.
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for element in &self.elements {
            writeln!(
                f,
                "Representation is {}, Type is {}",
                element,
                element.kind()
            )?;
        }
        Ok(())
    }
}
