use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use ui_components::{
    attach_click_handler, controls_from_json, render_controls, ButtonControl, Control,
    ControlBarModel, ControlBarOptions, ControlBarState, ControlClick, ControlElement, TabControl,
};

fn active_tabs(elements: &[ControlElement]) -> Vec<String> {
    elements
        .iter()
        .filter_map(|element| match element {
            ControlElement::Tab {
                control_id,
                active: true,
                ..
            } => Some(control_id.clone()),
            _ => None,
        })
        .collect()
}

fn two_tabs() -> Vec<Control> {
    vec![
        TabControl::new("a", "Alpha").into(),
        TabControl::new("b", "Beta").into(),
    ]
}

#[test]
fn clicking_tabs_moves_the_active_marker() {
    let observed = Rc::new(RefCell::new(Vec::new()));
    let mut controls = two_tabs();
    for id in ["a", "b"] {
        let sink = Rc::clone(&observed);
        attach_click_handler(&mut controls, id, move |click: ControlClick| {
            sink.borrow_mut().push(click.selected_tab)
        })
        .expect("attach handler");
    }
    let mut model = ControlBarModel::new(controls, ControlBarOptions::default()).expect("model");

    assert_eq!(active_tabs(&model.view().elements), Vec::<String>::new());

    model.click("a").expect("click a");
    assert_eq!(active_tabs(&model.view().elements), vec!["a".to_string()]);

    model.click("b").expect("click b");
    assert_eq!(active_tabs(&model.view().elements), vec!["b".to_string()]);

    // Handlers always observe the selection committed by their own click.
    assert_eq!(*observed.borrow(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn repeated_tab_clicks_are_idempotent() {
    let mut model = ControlBarModel::new(two_tabs(), ControlBarOptions::default()).expect("model");

    model.click("a").expect("first click");
    let once = model.view();
    model.click("a").expect("second click");

    assert_eq!(model.view(), once);
    assert_eq!(model.state().selected_tab, "a");
}

#[test]
fn exactly_one_tab_is_active_after_any_click() {
    let controls = controls_from_json(
        r#"[
            {"controlType":"tab","id":"one","label":"One"},
            {"controlType":"divider"},
            {"controlType":"tab","id":"two","label":"Two"},
            {"controlType":"button","id":"go","label":"Go"},
            {"controlType":"tab","id":"three","label":"Three"}
        ]"#,
    )
    .expect("parse controls");

    let priors = ["", "one", "two", "three"];
    for prior in priors {
        for clicked in ["one", "two", "three"] {
            let mut state = ControlBarState {
                selected_tab: prior.to_string(),
            };
            ui_components::dispatch_click(&controls, &mut state, clicked).expect("click tab");

            let elements = render_controls(&controls, &state);
            assert_eq!(
                active_tabs(&elements),
                vec![clicked.to_string()],
                "prior selection {prior:?}"
            );
        }
    }
}

#[test]
fn rendering_preserves_length_and_order() {
    let controls: Vec<Control> = vec![
        Control::Spacer,
        TabControl::new("a", "Alpha").into(),
        ButtonControl::new("run", "Run").into(),
        Control::Divider,
        TabControl::new("b", "Beta").into(),
    ];
    let state = ControlBarState {
        selected_tab: "b".to_string(),
    };

    let elements = render_controls(&controls, &state);
    let keys: Vec<&str> = elements.iter().map(ControlElement::key).collect();

    assert_eq!(elements.len(), controls.len());
    assert_eq!(keys, vec!["spacer-0", "a-1", "run-2", "divider-3", "b-4"]);
}

#[test]
fn button_clicks_keep_the_selected_tab() {
    let clicks = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&clicks);
    let mut controls = two_tabs();
    controls.push(
        ButtonControl::new("refresh", "Refresh")
            .on_click(move |_: ControlClick| *counter.borrow_mut() += 1)
            .into(),
    );
    let mut model = ControlBarModel::new(controls, ControlBarOptions::default()).expect("model");

    model.click("b").expect("click tab");
    model.click("refresh").expect("click button");

    assert_eq!(*clicks.borrow(), 1);
    assert_eq!(active_tabs(&model.view().elements), vec!["b".to_string()]);
}
