//! Defines the order in which a generation run visits the cells of the grid.

use crate::universe::GridConf;

/// Visits the cells of a grid in row-major order (y outer, x inner), yielding `(x, y)` coordinates.
#[derive(Clone, Debug)]
pub struct SerialGridIterator {
    width: usize,
    height: usize,
    x: usize,
    y: usize,
}

impl SerialGridIterator {
    pub fn new(conf: GridConf) -> SerialGridIterator {
        // a zero-width grid would otherwise spin through `height` empty rows
        let height = if conf.width == 0 { 0 } else { conf.height };
        SerialGridIterator {
            width: conf.width,
            height,
            x: 0,
            y: 0,
        }
    }
}

impl Iterator for SerialGridIterator {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.height {
            return None;
        }

        let coord = (self.x, self.y);
        self.x += 1;
        if self.x == self.width {
            self.x = 0;
            self.y += 1;
        }

        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.y >= self.height {
            0
        } else {
            (self.height - self.y) * self.width - self.x
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SerialGridIterator {}

#[test]
fn visits_rows_then_columns() {
    let coords: Vec<(usize, usize)> = SerialGridIterator::new(GridConf { width: 3, height: 2 }).collect();
    assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
}

#[test]
fn empty_dimensions_visit_nothing() {
    assert_eq!(SerialGridIterator::new(GridConf { width: 0, height: 5 }).count(), 0);
    assert_eq!(SerialGridIterator::new(GridConf { width: 5, height: 0 }).count(), 0);
}

#[test]
fn size_hint_is_exact() {
    let mut iter = SerialGridIterator::new(GridConf { width: 4, height: 3 });
    assert_eq!(iter.len(), 12);
    iter.next();
    iter.next();
    assert_eq!(iter.len(), 10);
    assert_eq!(iter.by_ref().count(), 10);
    assert_eq!(iter.len(), 0);
}
