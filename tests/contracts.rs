//! End-to-end property contracts across element kinds.

use std::cell::RefCell;
use std::rc::Rc;

use spark_props::engine::{InputRenderable, InputOptions, Renderable};
use spark_props::primitives::{
    BoxProps, InputProps, NativeOptions, SelectProps, TabSelectCallback, TabSelectProps,
    TextProps, box_primitive, input, select, tab_select, text,
};
use spark_props::{
    BoxStyle, EngineDefaults, Element, ElementKind, Error, Key, Overlay, Ref, Rgba, SelectOption,
    TabSelectOption, TextStyle, text_children,
};

fn text_options(element: &Element) -> spark_props::TextOptions {
    match element.options(&EngineDefaults::default()) {
        NativeOptions::Text(options) => options,
        other => panic!("expected text options, got {:?}", other.kind()),
    }
}

#[test]
fn test_direct_property_beats_style() {
    let element = text(
        TextProps::new("x")
            .with_base(TextStyle {
                fg: Some(Rgba::RED),
                ..Default::default()
            })
            .with_style(TextStyle {
                fg: Some(Rgba::BLUE),
                ..Default::default()
            }),
    );
    assert_eq!(text_options(&element).fg, Some(Rgba::RED));
}

#[test]
fn test_unset_everywhere_falls_back_to_default() {
    let element = text(TextProps::new("x"));
    let options = text_options(&element);
    assert_eq!(options.fg, Some(Rgba::WHITE));
    assert_eq!(options.bg, Some(Rgba::TRANSPARENT));
}

#[test]
fn test_style_fills_unset_direct_fields() {
    let element = text(TextProps::new("x").with_style(TextStyle {
        bg: Some(Rgba::GREEN),
        ..Default::default()
    }));
    assert_eq!(text_options(&element).bg, Some(Rgba::GREEN));
}

#[test]
fn test_shared_style_is_not_mutated() {
    let shared = BoxStyle {
        border_color: Some(Rgba::MAGENTA),
        ..Default::default()
    };
    let defaults = EngineDefaults::default();

    let a = box_primitive(BoxProps::default().with_style(shared.clone()));
    let b = box_primitive(
        BoxProps::default()
            .with_base(BoxStyle {
                border_color: Some(Rgba::YELLOW),
                ..Default::default()
            })
            .with_style(shared.clone()),
    );

    let (NativeOptions::Box(a), NativeOptions::Box(b)) = (a.options(&defaults), b.options(&defaults))
    else {
        panic!("expected box options");
    };
    assert_eq!(a.border_color, Some(Rgba::MAGENTA));
    assert_eq!(b.border_color, Some(Rgba::YELLOW));
    assert_eq!(shared.set_fields(), vec!["border_color"]);
}

#[test]
fn test_mixed_text_children() {
    let element = text(TextProps::new(text_children!["a", None::<&str>, 1, "b"]));
    let content = text_options(&element).content.unwrap_or_default();
    assert_eq!(content.plain_text(), "a1b");
}

#[test]
fn test_box_children_order_follows_keys() {
    let panel = box_primitive(BoxProps::new(
        ["A", "B", "C"]
            .into_iter()
            .map(|name| text(TextProps::new(name).with_key(name)))
            .collect(),
    ));

    let keys: Vec<_> = panel.children().iter().filter_map(Element::key).collect();
    assert_eq!(keys, [&Key::from("A"), &Key::from("B"), &Key::from("C")]);
}

#[test]
fn test_select_change_with_out_of_range_indices() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let props = SelectProps::new(vec![
        SelectOption::new("one", ""),
        SelectOption::new("two", ""),
    ])
    .on_change(move |index: i32, option: Option<&SelectOption>| {
        sink.borrow_mut().push((index, option.cloned()));
    });

    let defaults = EngineDefaults::default().select;
    props.emit_change(-1, &defaults);
    props.emit_change(2, &defaults);
    props.emit_change(0, &defaults);

    assert_eq!(
        *seen.borrow(),
        vec![(-1, None), (2, None), (0, Some(SelectOption::new("one", "")))]
    );
}

#[test]
fn test_select_callbacks_use_configured_options() {
    let defaults = EngineDefaults::from_toml_str("[select]\noptions = [{ name = \"A\" }]").unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let props = SelectProps::default().on_select(move |index: i32, option: Option<&SelectOption>| {
        sink.borrow_mut().push((index, option.map(|o| o.name.clone())));
    });

    let NativeOptions::Select(rendered) = select(props.clone()).options(&defaults) else {
        panic!("expected select options");
    };
    assert_eq!(rendered.options.map(|o| o.len()), Some(1));

    props.emit_select(0, &defaults.select);
    props.emit_select(1, &defaults.select);
    assert_eq!(*seen.borrow(), vec![(0, Some("A".to_string())), (1, None)]);
}

#[test]
fn test_tab_select_list_replaced_between_renders() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let callback: TabSelectCallback = Rc::new(move |index: i32, option: Option<&TabSelectOption>| {
        sink.borrow_mut().push((index, option.map(|o| o.name.clone())));
    });

    let mut first = TabSelectProps::new(vec![
        TabSelectOption::new("a", ""),
        TabSelectOption::new("b", ""),
        TabSelectOption::new("c", ""),
    ]);
    first.on_select = Some(callback.clone());
    let mut second = TabSelectProps::new(vec![TabSelectOption::new("z", "")]);
    second.on_select = Some(callback);

    let defaults = EngineDefaults::default().tab_select;
    first.emit_select(2, &defaults);
    second.emit_select(2, &defaults);
    second.emit_select(0, &defaults);

    assert_eq!(
        *seen.borrow(),
        vec![(2, Some("c".to_string())), (2, None), (0, Some("z".to_string()))]
    );

    let element = tab_select(second);
    assert_eq!(element.kind(), ElementKind::TabSelect);
}

#[test]
fn test_update_forwards_only_changes() {
    let defaults = EngineDefaults::default();
    let before = text(TextProps::new(text_children!["n = ", 1]));
    let after = text(TextProps::new(text_children!["n = ", 2]));

    let NativeOptions::Text(delta) = after.delta(&before, &defaults).unwrap() else {
        panic!("expected text delta");
    };
    assert_eq!(delta.content.map(|c| c.plain_text()), Some("n = 2".to_string()));
    assert_eq!(delta.fg, None);
    assert_eq!(delta.width, None);

    let err = after.delta(&input(InputProps::default()), &defaults).unwrap_err();
    assert!(matches!(err, Error::KindMismatch { .. }));
}

#[test]
fn test_dropped_side_spacing_is_reset() {
    let defaults = EngineDefaults::default();
    let before = box_primitive(BoxProps::default().with_base(BoxStyle {
        margin_top: Some(5),
        padding: Some(2),
        ..Default::default()
    }));
    let after = box_primitive(BoxProps::default());

    let NativeOptions::Box(delta) = after.delta(&before, &defaults).unwrap() else {
        panic!("expected box delta");
    };
    assert_eq!(delta.margin_top, Some(0));
    assert_eq!(delta.padding, Some(0));
    assert_eq!(delta.padding_left, Some(0));
    assert_eq!(delta.margin_left, None);

    let layout = after.options(&defaults).layout();
    assert_eq!(layout.margin_sides().top, 0);
    assert_eq!(layout.margin_top, Some(0));
}

struct FakeInput {
    applied: RefCell<Vec<InputOptions>>,
}

impl Renderable for FakeInput {
    fn id(&self) -> &str {
        "input-1"
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Input
    }
}

impl InputRenderable for FakeInput {
    fn apply(&self, delta: &InputOptions) {
        self.applied.borrow_mut().push(delta.clone());
    }
}

#[test]
fn test_ref_observes_created_renderable() {
    let handle: Ref<dyn InputRenderable> = Ref::new();
    let element = input(InputProps::default().with_key("name").with_ref(&handle));

    let Element::Input(props) = &element else {
        panic!("expected input");
    };
    let slot = props.common.node_ref.clone().unwrap();
    slot.attach(Rc::new(FakeInput {
        applied: RefCell::new(Vec::new()),
    }))
    .unwrap();

    let instance = handle.current().unwrap();
    assert_eq!(instance.id(), "input-1");

    let NativeOptions::Input(options) = element.options(&EngineDefaults::default()) else {
        panic!("expected input options");
    };
    instance.apply(&options);

    slot.detach();
    assert!(handle.current().is_none());
}

#[test]
fn test_every_kind_resolves() {
    let defaults = EngineDefaults::default();
    let elements = [
        text(TextProps::default()),
        box_primitive(BoxProps::default()),
        spark_props::group(Default::default()),
        input(InputProps::default()),
        select(SelectProps::default()),
        tab_select(TabSelectProps::default()),
    ];

    let kinds: Vec<_> = elements.iter().map(|e| e.options(&defaults).kind()).collect();
    assert_eq!(kinds, ElementKind::ALL.to_vec());
    for element in &elements {
        let layout = element.options(&defaults).layout();
        assert_eq!(layout.visible, Some(true));
    }
}
