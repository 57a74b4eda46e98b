use waterfall_core::{
    AxisConfiguration, ColumnSpec, GridSettings, HorizontalAlignment, RowSpec, TrackInfo,
    TrackRenderer, TrackSpec, WaterfallGrid,
};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: u32,
    height: f64,
}

fn items(count: u32) -> Vec<Item> {
    (0..count)
        .map(|id| Item {
            id,
            height: 100.0 + f64::from(id % 5) * 40.0,
        })
        .collect()
}

/// Renders each track as its summed height plus per-item spacing.
struct HeightRenderer {
    visited: Vec<usize>,
}

impl TrackRenderer<Vec<Item>> for HeightRenderer {
    type Output = f64;

    fn render_track(&mut self, track: TrackInfo<'_, Vec<Item>>) -> f64 {
        self.visited.push(track.index());
        let spacing = track.spec().spacing().unwrap_or(0.0);
        let gaps = track.view().len().saturating_sub(1) as f64;
        track.view().iter().map(|item| item.height).sum::<f64>() + gaps * spacing
    }
}

#[test]
fn renderer_visits_every_track_once_in_order() {
    let axis = AxisConfiguration::uniform_columns(4).with_all_spacings(10.0);
    let data = items(30);
    let grid = WaterfallGrid::new(&axis, &data).with_spacing(Some(8.0));

    let mut renderer = HeightRenderer {
        visited: Vec::new(),
    };
    let heights = grid.render(&mut renderer);

    assert_eq!(renderer.visited, vec![0, 1, 2, 3]);
    assert_eq!(heights.len(), 4);
    assert!(heights.iter().all(|height| *height > 0.0));
    assert_eq!(grid.spacing(), Some(8.0));
}

#[test]
fn tracks_carry_index_count_spec_and_view() {
    let axis = AxisConfiguration::Columns(vec![
        ColumnSpec::new(HorizontalAlignment::Leading, Some(2.0)),
        ColumnSpec::default(),
        ColumnSpec::new(HorizontalAlignment::Trailing, None),
    ]);
    let data = items(8);
    let grid = WaterfallGrid::new(&axis, &data);

    let tracks: Vec<_> = grid.tracks().collect();
    assert_eq!(tracks.len(), 3);

    let first = &tracks[0];
    assert_eq!(first.index(), 0);
    assert_eq!(first.items_count(), 3);
    assert!(first.is_first());
    assert_eq!(
        first.column(),
        Some(&ColumnSpec::new(HorizontalAlignment::Leading, Some(2.0)))
    );
    assert_eq!(first.row(), None);
    let ids: Vec<u32> = first.view().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![0, 3, 6]);

    let last = &tracks[2];
    assert!(last.is_last());
    let ids: Vec<u32> = last.view().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![2, 5]);
}

#[test]
fn row_grid_uses_row_specs() {
    let axis = AxisConfiguration::uniform_rows(2);
    let data = items(5);
    let grid = WaterfallGrid::new(&axis, &data);

    assert!(!grid.is_vertical());
    let track = grid.track(1).expect("row 1 exists");
    assert_eq!(track.spec(), TrackSpec::Row(RowSpec::default()));
    assert_eq!(track.row(), Some(&RowSpec::default()));
    assert_eq!(track.view().len(), 2);
}

#[test]
fn render_with_closure_collects_ids_per_track() {
    let axis = AxisConfiguration::uniform_columns(2);
    let data = items(5);
    let grid = WaterfallGrid::new(&axis, &data);

    let ids = grid.render_with(|track| track.view().iter().map(|item| item.id).collect::<Vec<_>>());
    assert_eq!(ids, vec![vec![0, 2, 4], vec![1, 3]]);
}

#[test]
fn changing_track_count_reslices_the_same_source() {
    let data = items(10);
    let two = AxisConfiguration::uniform_columns(2);
    let four = two.with_track_count(4, None);

    let lengths = |axis: &AxisConfiguration| -> Vec<usize> {
        WaterfallGrid::new(axis, &data)
            .tracks()
            .map(|track| track.view().len())
            .collect()
    };
    assert_eq!(lengths(&two), vec![5, 5]);
    assert_eq!(lengths(&four), vec![3, 3, 2, 2]);
}

#[test]
fn locate_finds_track_and_position() {
    let axis = AxisConfiguration::uniform_columns(3);
    let data = items(7);
    let grid = WaterfallGrid::new(&axis, &data);

    for flat in 0..data.len() {
        let (track_index, local) = grid.locate(flat).expect("flat index is in range");
        let track = grid.track(track_index).expect("track exists");
        assert_eq!(track.view().at(local), Ok(&data[flat]));
    }
    assert_eq!(grid.locate(7), None);
}

#[test]
fn track_info_equality_compares_elements() {
    let axis = AxisConfiguration::uniform_columns(2);
    let left = items(6);
    let right = items(6);

    let left_grid = WaterfallGrid::new(&axis, &left);
    let right_grid = WaterfallGrid::new(&axis, &right);
    assert_eq!(
        left_grid.track(1).expect("track 1"),
        right_grid.track(1).expect("track 1")
    );
}

#[test]
fn settings_drive_track_and_item_spacing() {
    let settings = GridSettings {
        spacing: 14.0,
        item_spacing: 6.0,
    };
    let mut axis = AxisConfiguration::uniform_columns(3);
    settings.apply_to(&mut axis).expect("settings are valid");
    let data = items(9);

    let grid = WaterfallGrid::new(&axis, &data)
        .with_settings(&settings)
        .expect("settings are valid");

    assert_eq!(grid.spacing(), Some(settings.spacing));
    assert!(grid
        .tracks()
        .all(|track| track.spec().spacing() == Some(settings.item_spacing)));
}
