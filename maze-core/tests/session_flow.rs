use std::rc::Rc;

use maze_core::protocol::{self, PathRequest};
use maze_core::style::{self, Tag};
use maze_core::{Lang, MazeSession, Phase};

// 2x2 maze, every wall closed except the passage between (0,0) and (1,0).
const TWO_BY_TWO: &str = r#"[
  [{"x":0,"y":0,"norte":false,"sur":false,"este":true,"oeste":false},
   {"x":1,"y":0,"norte":false,"sur":false,"este":false,"oeste":true}],
  [{"x":0,"y":1,"norte":false,"sur":false,"este":false,"oeste":false},
   {"x":1,"y":1,"norte":false,"sur":false,"este":false,"oeste":false}]
]"#;

fn loaded_session() -> MazeSession {
    let mut session = MazeSession::new(Lang::En, 2, 2);
    session.directory_accepted("/tmp/mazes");
    let ticket = session.begin_load().unwrap();
    assert_eq!(ticket.payload.query_string(), "alto=2&ancho=2");
    let rows = protocol::parse_grid(TWO_BY_TWO).unwrap();
    session.finish_load(&ticket, rows).unwrap();
    session
}

#[test]
fn styles_for_two_by_two_passage() {
    let session = loaded_session();
    let grid = session.grid();
    let origin = grid.cell(0, 0).unwrap();
    let tags = style::resolve(origin, grid.height(), grid.width());
    for expected in [Tag::WestWall, Tag::NoEastWall, Tag::SouthWall, Tag::NorthWall] {
        assert!(tags.contains(&expected), "missing {expected:?} in {tags:?}");
    }
    let right = grid.cell(1, 0).unwrap();
    let tags = style::resolve(right, grid.height(), grid.width());
    assert!(tags.contains(&Tag::NoWestWall));
    assert!(tags.contains(&Tag::EastWall));
}

#[test]
fn select_and_overlay_path() {
    let mut session = loaded_session();
    assert!(session.click(0, 0).unwrap().is_none());
    let ticket = session.click(1, 0).unwrap().expect("path request");
    assert_eq!(
        ticket.payload,
        PathRequest {
            x1: 0,
            y1: 0,
            x2: 1,
            y2: 0
        }
    );
    assert_eq!(
        serde_json::to_value(ticket.payload).unwrap(),
        serde_json::json!({"x1": 0, "y1": 0, "x2": 1, "y2": 0})
    );

    let rows_before: Vec<_> = session.grid().rows().to_vec();
    let path = protocol::parse_path(r#"[{"x":0,"y":0},{"x":1,"y":0}]"#).unwrap();
    let report = session.finish_path(&ticket, &path).unwrap();
    assert_eq!(report.painted, 2);
    assert!(report.skipped.is_empty());

    let grid = session.grid();
    let start = grid.cell(0, 0).unwrap();
    let end = grid.cell(1, 0).unwrap();
    assert!(start.on_path && start.is_start);
    assert!(end.on_path && end.is_end);
    assert!(!Rc::ptr_eq(&rows_before[0], &grid.rows()[0]));
    assert!(Rc::ptr_eq(&rows_before[1], &grid.rows()[1]));

    let classes = style::class_list(start, grid.height(), grid.width());
    assert!(classes.contains(" start"));
    assert!(classes.contains(" path"));
}

#[test]
fn late_path_after_reset_is_ignored() {
    let mut session = loaded_session();
    session.click(0, 0).unwrap();
    let ticket = session.click(1, 1).unwrap().unwrap();
    // third click starts a new cycle before the solver answers
    assert!(session.click(0, 1).unwrap().is_none());
    assert_eq!(session.selection().phase(), Phase::StartSet);
    let rows_before: Vec<_> = session.grid().rows().to_vec();

    let path = protocol::parse_path(r#"[{"x":0,"y":0},{"x":0,"y":1},{"x":1,"y":1}]"#).unwrap();
    let err = session.finish_path(&ticket, &path).unwrap_err();
    assert!(err.is_stale());
    assert!(session.grid().cells().all(|c| !c.on_path));
    let unchanged = rows_before
        .iter()
        .zip(session.grid().rows())
        .all(|(a, b)| Rc::ptr_eq(a, b));
    assert!(unchanged);

    let start = session.selection().selection().start.unwrap();
    assert_eq!((start.x, start.y), (0, 1));
}

#[test]
fn solver_coordinates_outside_grid_are_skipped() {
    let mut session = loaded_session();
    session.click(0, 0).unwrap();
    let ticket = session.click(1, 0).unwrap().unwrap();
    let path = protocol::parse_path(r#"[{"x":0,"y":0},{"x":4,"y":9}]"#).unwrap();
    let report = session.finish_path(&ticket, &path).unwrap();
    assert_eq!(report.painted, 1);
    assert_eq!(report.skipped.len(), 1);
}

// 2 rows by 3 columns, each record numbered (row, column) the way the server does.
const ROW_MAJOR_TWO_BY_THREE: &str = r#"[
  [{"x":0,"y":0,"este":true},{"x":0,"y":1,"oeste":true,"este":true},{"x":0,"y":2,"oeste":true,"norte":true}],
  [{"x":1,"y":0},{"x":1,"y":1},{"x":1,"y":2,"sur":true}]
]"#;

#[test]
fn row_column_numbering_round_trips_through_solver() {
    let mut session = MazeSession::new(Lang::En, 2, 3);
    session.directory_accepted("/tmp/mazes");
    let load = session.begin_load().unwrap();
    let rows = protocol::parse_grid(ROW_MAJOR_TWO_BY_THREE).unwrap();
    session.finish_load(&load, rows).unwrap();

    session.click(2, 0).unwrap();
    let ticket = session.click(2, 1).unwrap().unwrap();
    assert_eq!(
        serde_json::to_value(ticket.payload).unwrap(),
        serde_json::json!({"x1": 0, "y1": 2, "x2": 1, "y2": 2})
    );

    let path = protocol::parse_path(r#"[{"x":0,"y":2},{"x":1,"y":2}]"#).unwrap();
    let report = session.finish_path(&ticket, &path).unwrap();
    assert_eq!(report.painted, 2);
    assert!(report.skipped.is_empty());

    let grid = session.grid();
    let start = grid.cell(2, 0).unwrap();
    let end = grid.cell(2, 1).unwrap();
    assert!(start.on_path && start.is_start);
    assert!(end.on_path && end.is_end);
    assert_eq!(grid.cells().filter(|c| c.on_path).count(), 2);
}
