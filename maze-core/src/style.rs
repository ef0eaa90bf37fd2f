//! Maps a cell to the CSS classes the board renders it with.

use crate::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    NorthWall,
    NoNorthWall,
    SouthWall,
    NoSouthWall,
    EastWall,
    NoEastWall,
    WestWall,
    NoWestWall,
    Start,
    End,
    Path,
}

impl Tag {
    pub fn class_name(self) -> &'static str {
        match self {
            Tag::NorthWall => "north-wall",
            Tag::NoNorthWall => "no-north-wall",
            Tag::SouthWall => "south-wall",
            Tag::NoSouthWall => "no-south-wall",
            Tag::EastWall => "east-wall",
            Tag::NoEastWall => "no-east-wall",
            Tag::WestWall => "west-wall",
            Tag::NoWestWall => "no-west-wall",
            Tag::Start => "start",
            Tag::End => "end",
            Tag::Path => "path",
        }
    }
}

fn side(wall: bool, yes: Tag, no: Tag) -> Tag {
    if wall { yes } else { no }
}

/// Wall tags come first in north, south, east, west order, followed by any
/// overlay tags.
///
/// The north boundary compares against `height`, not `height - 1`, so the
/// top row only shows a north wall when the cell itself has one.
pub fn resolve(cell: &Cell, height: usize, width: usize) -> Vec<Tag> {
    let mut tags = Vec::with_capacity(7);
    tags.push(side(
        !cell.north || cell.y == height,
        Tag::NorthWall,
        Tag::NoNorthWall,
    ));
    tags.push(side(
        !cell.south || cell.y == 0,
        Tag::SouthWall,
        Tag::NoSouthWall,
    ));
    tags.push(side(
        !cell.east || cell.x + 1 == width,
        Tag::EastWall,
        Tag::NoEastWall,
    ));
    tags.push(side(
        !cell.west || cell.x == 0,
        Tag::WestWall,
        Tag::NoWestWall,
    ));
    if cell.is_start {
        tags.push(Tag::Start);
    }
    if cell.is_end {
        tags.push(Tag::End);
    }
    if cell.on_path {
        tags.push(Tag::Path);
    }
    tags
}

/// Space separated class list, prefixed with the base `cell` class.
pub fn class_list(cell: &Cell, height: usize, width: usize) -> String {
    let mut out = String::from("cell");
    for tag in resolve(cell, height, width) {
        out.push(' ');
        out.push_str(tag.class_name());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(x: usize, y: usize) -> Cell {
        Cell {
            north: true,
            south: true,
            east: true,
            west: true,
            ..Cell::new(x, y)
        }
    }

    #[test]
    fn exactly_one_tag_per_side() {
        let pairs = [
            (Tag::NorthWall, Tag::NoNorthWall),
            (Tag::SouthWall, Tag::NoSouthWall),
            (Tag::EastWall, Tag::NoEastWall),
            (Tag::WestWall, Tag::NoWestWall),
        ];
        for bits in 0u8..16 {
            for (x, y) in [(0, 0), (1, 1), (2, 3), (3, 2)] {
                let cell = Cell {
                    north: bits & 1 != 0,
                    south: bits & 2 != 0,
                    east: bits & 4 != 0,
                    west: bits & 8 != 0,
                    ..Cell::new(x, y)
                };
                let tags = resolve(&cell, 4, 4);
                for (yes, no) in pairs {
                    let n = tags.iter().filter(|t| **t == yes || **t == no).count();
                    assert_eq!(n, 1, "cell {cell:?}");
                }
                assert_eq!(tags, resolve(&cell, 4, 4));
            }
        }
    }

    #[test]
    fn interior_open_cell_has_no_walls() {
        let tags = resolve(&open(1, 1), 3, 3);
        assert_eq!(
            tags,
            vec![
                Tag::NoNorthWall,
                Tag::NoSouthWall,
                Tag::NoEastWall,
                Tag::NoWestWall
            ]
        );
    }

    #[test]
    fn edges_force_walls() {
        let tags = resolve(&open(0, 0), 3, 3);
        assert!(tags.contains(&Tag::SouthWall));
        assert!(tags.contains(&Tag::WestWall));
        let tags = resolve(&open(2, 1), 3, 3);
        assert!(tags.contains(&Tag::EastWall));
    }

    #[test]
    fn north_boundary_uses_height_not_last_row() {
        // The top row of a 3-high grid is y == 2; it stays open to the north.
        assert!(resolve(&open(1, 2), 3, 3).contains(&Tag::NoNorthWall));
        assert!(resolve(&open(1, 3), 3, 3).contains(&Tag::NorthWall));
    }

    #[test]
    fn overlay_tags_follow_flags() {
        let cell = Cell {
            is_start: true,
            on_path: true,
            ..open(1, 1)
        };
        let tags = resolve(&cell, 3, 3);
        assert!(tags.contains(&Tag::Start));
        assert!(tags.contains(&Tag::Path));
        assert!(!tags.contains(&Tag::End));
    }

    #[test]
    fn two_by_two_passage() {
        let origin = Cell {
            east: true,
            ..Cell::new(0, 0)
        };
        let tags = resolve(&origin, 2, 2);
        assert_eq!(
            tags,
            vec![Tag::NorthWall, Tag::SouthWall, Tag::NoEastWall, Tag::WestWall]
        );
        let neighbour = Cell {
            west: true,
            ..Cell::new(1, 0)
        };
        assert_eq!(
            resolve(&neighbour, 2, 2),
            vec![Tag::NorthWall, Tag::SouthWall, Tag::EastWall, Tag::NoWestWall]
        );
    }

    #[test]
    fn class_list_joins_names() {
        let cell = Cell {
            is_end: true,
            ..Cell::new(0, 0)
        };
        assert_eq!(
            class_list(&cell, 1, 1),
            "cell north-wall south-wall east-wall west-wall end"
        );
    }
}
