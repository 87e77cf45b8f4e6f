use cellplot::cells::{CellId, CellKind, FieldId};
use cellplot::figure::{FigureOptions, MAX_BINS};
use cellplot::{CellManager, CellplotError, RenderOutcome, MAX_CELL_NUMBER};

fn manager_with(kind: CellKind, fields: &[(FieldId, &str)]) -> (CellManager, CellId) {
    let mut manager = CellManager::new();
    let id = manager.create_cell(kind).unwrap();
    let cell = manager.get_mut(id).unwrap();
    for (field, value) in fields {
        cell.set_field(*field, *value).unwrap();
    }
    (manager, id)
}

fn render(manager: &mut CellManager) -> RenderOutcome {
    manager.render(&FigureOptions::default())
}

#[test]
fn sixth_cell_is_rejected() {
    let mut manager = CellManager::new();
    for _ in 0..MAX_CELL_NUMBER {
        manager.create_cell(CellKind::Plot).unwrap();
    }
    let err = manager.create_cell(CellKind::Bar).unwrap_err();
    assert!(matches!(err, CellplotError::CapacityReached));
    assert_eq!(err.to_string(), "Max number of cells reached!");
    assert_eq!(manager.len(), MAX_CELL_NUMBER);
}

#[test]
fn pie_excludes_every_other_kind() {
    let mut manager = CellManager::new();
    let pie = manager.create_cell(CellKind::Pie).unwrap();
    assert!(manager.enabled_kinds().is_empty());
    for kind in CellKind::ALL {
        assert!(manager.create_cell(kind).is_err(), "{} accepted", kind);
    }

    manager.delete_cell(pie).unwrap();
    assert_eq!(manager.enabled_kinds(), CellKind::ALL.to_vec());
}

#[test]
fn non_pie_disables_pie_until_empty() {
    let mut manager = CellManager::new();
    let a = manager.create_cell(CellKind::Bar).unwrap();
    let b = manager.create_cell(CellKind::Histogram).unwrap();
    assert!(!manager.is_kind_enabled(CellKind::Pie));
    assert!(matches!(
        manager.create_cell(CellKind::Pie),
        Err(CellplotError::KindDisabled { .. })
    ));

    manager.delete_cell(a).unwrap();
    assert!(!manager.is_kind_enabled(CellKind::Pie));
    manager.delete_cell(b).unwrap();
    assert!(manager.is_kind_enabled(CellKind::Pie));
}

#[test]
fn rendering_nothing() {
    let mut manager = CellManager::new();
    let outcome = render(&mut manager);
    assert!(matches!(outcome, RenderOutcome::Nothing));
    assert_eq!(outcome.to_string(), "No cells to plot!");
}

#[test]
fn mismatch_highlights_then_fix_clears() {
    let (mut manager, id) =
        manager_with(CellKind::Plot, &[(FieldId::X, "1, 2, 3"), (FieldId::Y, "1, 2")]);

    let outcome = render(&mut manager);
    assert_eq!(
        outcome.to_string(),
        format!(
            "Error in red cell {}: x and y must have same first dimension, but have shapes (3,) and (2,)",
            id
        )
    );
    assert!(manager.get(id).unwrap().failed());

    manager
        .get_mut(id)
        .unwrap()
        .set_field(FieldId::Y, "1, 2, 3")
        .unwrap();
    let outcome = render(&mut manager);
    assert!(outcome.is_rendered());
    assert!(!manager.get(id).unwrap().failed());
}

#[test]
fn first_failure_wins() {
    let mut manager = CellManager::new();
    let good = manager.create_cell(CellKind::Bar).unwrap();
    let bad = manager.create_cell(CellKind::Scatter).unwrap();
    let worse = manager.create_cell(CellKind::Plot).unwrap();
    manager
        .get_mut(good)
        .unwrap()
        .set_field(FieldId::Y, "1")
        .unwrap();
    manager
        .get_mut(good)
        .unwrap()
        .set_field(FieldId::X, "a")
        .unwrap();
    manager
        .get_mut(bad)
        .unwrap()
        .set_field(FieldId::X, "1, 2")
        .unwrap();
    manager
        .get_mut(worse)
        .unwrap()
        .set_field(FieldId::Y, "nope")
        .unwrap();

    match render(&mut manager) {
        RenderOutcome::Failed { id, error } => {
            assert_eq!(id, bad);
            assert!(matches!(error, CellplotError::SizeMismatch));
        },
        other => panic!("unexpected outcome {:?}", other),
    }
    assert!(!manager.get(good).unwrap().failed());
    assert!(manager.get(bad).unwrap().failed());
    assert!(!manager.get(worse).unwrap().failed());
}

#[test]
fn every_kind_renders_with_valid_input() {
    let cases: [(CellKind, &[(FieldId, &str)]); 5] = [
        (CellKind::Plot, &[(FieldId::X, "1, 2, 3"), (FieldId::Y, "1, 4, 9")]),
        (CellKind::Scatter, &[(FieldId::X, "1, 2, 3"), (FieldId::Y, "3, 1, 2")]),
        (CellKind::Bar, &[(FieldId::X, "A, B"), (FieldId::Y, "3, 5")]),
        (CellKind::Histogram, &[(FieldId::Data, "1, 1, 2"), (FieldId::Bins, "2")]),
        (CellKind::Pie, &[(FieldId::Data, "50, 30, 20"), (FieldId::Label, "a, b, c")]),
    ];
    for (kind, fields) in cases {
        let (mut manager, _) = manager_with(kind, fields);
        let outcome = render(&mut manager);
        assert_eq!(outcome.to_string(), "Successfully plotted!", "{}", kind);
    }
}

#[test]
fn malformed_lists_fail() {
    for text in ["1;2;3", "1 / 2 / 3"] {
        let (mut manager, id) = manager_with(CellKind::Histogram, &[(FieldId::Data, text)]);
        match render(&mut manager) {
            RenderOutcome::Failed { id: failed, error } => {
                assert_eq!(failed, id);
                assert_eq!(
                    error.to_string(),
                    format!("could not convert string to float: '{}'", text)
                );
            },
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}

#[test]
fn invalid_bins_are_reported() {
    let (mut manager, _) =
        manager_with(CellKind::Histogram, &[(FieldId::Data, "1, 2"), (FieldId::Bins, "0")]);
    assert!(matches!(
        render(&mut manager),
        RenderOutcome::Failed {
            error: CellplotError::NonPositiveBins { bins: 0 },
            ..
        }
    ));

    let (mut manager, id) = manager_with(
        CellKind::Histogram,
        &[(FieldId::Data, "1, 2, 3"), (FieldId::Bins, "1000000000000000000")],
    );
    match render(&mut manager) {
        RenderOutcome::Failed { id: failed, error } => {
            assert_eq!(failed, id);
            assert!(matches!(error, CellplotError::TooManyBins { .. }));
            assert!(error.is_input_error());
        },
        other => panic!("unexpected outcome {:?}", other),
    }
    assert!(manager.get(id).unwrap().failed());

    let (mut manager, _) = manager_with(
        CellKind::Histogram,
        &[(FieldId::Data, "1, 2, 3"), (FieldId::Bins, &MAX_BINS.to_string())],
    );
    assert!(render(&mut manager).is_rendered());
}

#[test]
fn options_are_applied_to_the_figure() {
    let (mut manager, _) = manager_with(
        CellKind::Plot,
        &[(FieldId::Y, "1, 2"), (FieldId::Label, "series")],
    );
    let options = FigureOptions {
        title: "T".to_string(),
        legend: true,
        ..FigureOptions::default()
    };
    let figure = manager.render(&options).into_figure().unwrap();
    assert_eq!(figure.options().title, "T");
    assert_eq!(figure.legend_entries()[0].0, "series");
}

#[test]
fn plot_rejects_incompatible_x() {
    for x in ["1, 2, 3, 4, 5, 6", "1;2;3", "1 / 2 / 3"] {
        let (mut manager, id) =
            manager_with(CellKind::Plot, &[(FieldId::X, x), (FieldId::Y, "4, 5, 6")]);
        let outcome = render(&mut manager);
        assert!(!outcome.is_rendered(), "{} accepted", x);
        assert!(manager.get(id).unwrap().failed());
    }
}
