use bato::{bato, classes, ClassValue, CompoundVariant, Props, Resolver, VariantConfig};

const PRIMARY: &str = "button--primary bg-blue-500 text-white border-transparent hover:bg-blue-600";
const SECONDARY: &str =
    "button--secondary bg-white text-gray-800 border-gray-400 hover:bg-gray-100";
const WARNING: &str = "button--warning bg-yellow-500 border-transparent hover:bg-yellow-600";
const DANGER: &str = "button--danger bg-red-500 text-white border-transparent hover:bg-red-600";
const DISABLED: &str = "button--disabled opacity-050 cursor-not-allowed";
const ENABLED: &str = "button--enabled cursor-pointer";
const SMALL: &str = "button--small text-sm py-1 px-2";
const MEDIUM: &str = "button--medium text-base py-2 px-4";
const LARGE: &str = "button--large text-lg py-2.5 px-4";
const BASE: &str = "button font-semibold border rounded";

#[derive(Clone, Copy)]
enum Spelling {
    Class,
    ClassName,
}

fn danger() -> ClassValue {
    classes![
        "button--danger",
        classes![
            "bg-red-500",
            ClassValue::toggles([("baz", false)]),
            classes!["text-white", classes!["border-transparent"]],
        ],
        "hover:bg-red-600",
    ]
}

fn with_classes(rule: CompoundVariant, spelling: Spelling, classes: ClassValue) -> CompoundVariant {
    match spelling {
        Spelling::Class => rule.class(classes),
        Spelling::ClassName => rule.class_name(classes),
    }
}

fn button(spelling: Spelling, as_lists: bool) -> VariantConfig {
    let payload = |s: &str| -> ClassValue {
        if as_lists {
            ClassValue::from(s.split(' ').collect::<Vec<_>>())
        } else {
            ClassValue::from(s)
        }
    };

    VariantConfig::new()
        .variant(
            "intent",
            [
                ("primary", payload(PRIMARY)),
                ("secondary", payload(SECONDARY)),
                ("warning", payload(WARNING)),
                ("danger", danger()),
            ],
        )
        .variant(
            "disabled",
            [(true, payload(DISABLED)), (false, payload(ENABLED))],
        )
        .variant(
            "size",
            [
                ("small", payload(SMALL)),
                ("medium", payload(MEDIUM)),
                ("large", payload(LARGE)),
            ],
        )
        .variant("m", [(0, "m-0"), (1, "m-1")])
        .compound(with_classes(
            CompoundVariant::new()
                .when("intent", "primary")
                .when("size", "medium"),
            spelling,
            payload("button--primary-medium uppercase"),
        ))
        .compound(with_classes(
            CompoundVariant::new()
                .when("intent", "warning")
                .when("disabled", false),
            spelling,
            payload("button--warning-enabled text-gray-800"),
        ))
        .compound(with_classes(
            CompoundVariant::new()
                .when("intent", "warning")
                .when("disabled", true),
            spelling,
            classes![
                "button--warning-disabled",
                classes!["text-black", ClassValue::toggles([("baz", false)])],
            ],
        ))
}

fn button_with_defaults(spelling: Spelling, as_lists: bool) -> VariantConfig {
    button(spelling, as_lists)
        .base(BASE)
        .compound(with_classes(
            CompoundVariant::new().when_any("intent", ["warning", "danger"]),
            spelling,
            ClassValue::from("button--warning-danger !border-red-500"),
        ))
        .compound(with_classes(
            CompoundVariant::new()
                .when_any("intent", ["warning", "danger"])
                .when("size", "medium"),
            spelling,
            ClassValue::from("button--warning-danger-medium"),
        ))
        .default_variant("m", 0)
        .default_variant("disabled", false)
        .default_variant("intent", "primary")
        .default_variant("size", "medium")
}

fn all_flavours(build: fn(Spelling, bool) -> VariantConfig) -> Vec<Resolver> {
    [
        (Spelling::Class, false),
        (Spelling::ClassName, false),
        (Spelling::Class, true),
        (Spelling::ClassName, true),
    ]
    .into_iter()
    .map(|(spelling, as_lists)| bato(build(spelling, as_lists)))
    .collect()
}

fn join(parts: &[&str]) -> String {
    parts.join(" ")
}

fn check(resolvers: &[Resolver], props: Option<Props>, expected: &str) {
    for resolver in resolvers {
        assert_eq!(
            resolver.resolve(props.as_ref()).unwrap(),
            expected,
            "props: {:?}",
            props
        );
    }
}

#[test]
fn test_without_base_without_defaults() {
    let buttons = all_flavours(button);

    check(&buttons, None, "");
    check(&buttons, Some(Props::new()), "");
    check(&buttons, Some(Props::new().set("aCheekyInvalidProp", "lol")), "");
    check(&buttons, Some(Props::new().set("intent", "secondary")), SECONDARY);
    check(&buttons, Some(Props::new().set("size", "small")), SMALL);
    check(&buttons, Some(Props::new().set("disabled", true)), DISABLED);
    check(
        &buttons,
        Some(Props::new().set("intent", "secondary").set("size", "unset")),
        SECONDARY,
    );
    check(
        &buttons,
        Some(Props::new().set("intent", "danger").set("size", "medium")),
        &join(&[DANGER, MEDIUM]),
    );
    check(
        &buttons,
        Some(Props::new().set("intent", "warning").set("size", "large")),
        &join(&[WARNING, LARGE]),
    );
    check(
        &buttons,
        Some(
            Props::new()
                .set("intent", "warning")
                .set("size", "large")
                .set("disabled", true),
        ),
        &join(&[WARNING, DISABLED, LARGE, "button--warning-disabled text-black"]),
    );
    check(
        &buttons,
        Some(Props::new().set("intent", "primary").set("m", 0)),
        &join(&[PRIMARY, "m-0"]),
    );
    check(
        &buttons,
        Some(Props::new().set("intent", "primary").set("m", 1)),
        &join(&[PRIMARY, "m-1"]),
    );
    check(
        &buttons,
        Some(
            Props::new()
                .set("intent", "primary")
                .set("m", 1)
                .class("adhoc-class"),
        ),
        &join(&[PRIMARY, "m-1 adhoc-class"]),
    );
    check(
        &buttons,
        Some(
            Props::new()
                .set("intent", "primary")
                .set("m", 1)
                .class_name("adhoc-classname"),
        ),
        &join(&[PRIMARY, "m-1 adhoc-classname"]),
    );
}

#[test]
fn test_with_base_with_defaults() {
    let buttons = all_flavours(button_with_defaults);
    let default_output = join(&[BASE, PRIMARY, ENABLED, MEDIUM, "m-0 button--primary-medium uppercase"]);

    check(&buttons, None, &default_output);
    check(&buttons, Some(Props::new()), &default_output);
    check(
        &buttons,
        Some(Props::new().set("aCheekyInvalidProp", "lol")),
        &default_output,
    );
    check(
        &buttons,
        Some(Props::new().set("intent", "secondary")),
        &join(&[BASE, SECONDARY, ENABLED, MEDIUM, "m-0"]),
    );
    check(
        &buttons,
        Some(Props::new().set("size", "small")),
        &join(&[BASE, PRIMARY, ENABLED, SMALL, "m-0"]),
    );
    check(
        &buttons,
        Some(Props::new().set("disabled", true)),
        &join(&[BASE, PRIMARY, DISABLED, MEDIUM, "m-0 button--primary-medium uppercase"]),
    );
    check(
        &buttons,
        Some(Props::new().set("intent", "secondary").set("size", "unset")),
        &join(&[BASE, SECONDARY, ENABLED, "m-0"]),
    );
    check(
        &buttons,
        Some(Props::new().set("intent", "danger").set("size", "medium")),
        &join(&[
            BASE,
            DANGER,
            ENABLED,
            MEDIUM,
            "m-0 button--warning-danger !border-red-500 button--warning-danger-medium",
        ]),
    );
    check(
        &buttons,
        Some(Props::new().set("intent", "warning").set("size", "large")),
        &join(&[
            BASE,
            WARNING,
            ENABLED,
            LARGE,
            "m-0 button--warning-enabled text-gray-800 button--warning-danger !border-red-500",
        ]),
    );
    check(
        &buttons,
        Some(
            Props::new()
                .set("intent", "warning")
                .set("size", "large")
                .set("disabled", true),
        ),
        &join(&[
            BASE,
            WARNING,
            DISABLED,
            LARGE,
            "m-0 button--warning-disabled text-black button--warning-danger !border-red-500",
        ]),
    );
    check(
        &buttons,
        Some(Props::new().set("intent", "primary").set("m", 1)),
        &join(&[BASE, PRIMARY, ENABLED, MEDIUM, "m-1 button--primary-medium uppercase"]),
    );
    check(
        &buttons,
        Some(
            Props::new()
                .set("intent", "primary")
                .set("m", 0)
                .class("adhoc-class"),
        ),
        &join(&[
            BASE,
            PRIMARY,
            ENABLED,
            MEDIUM,
            "m-0 button--primary-medium uppercase adhoc-class",
        ]),
    );
}

#[test]
fn test_empty_sections_resolve_to_adhoc_classes() {
    let sources = [
        r#"{"base": {}}"#,
        r#"{"variants": {}}"#,
        r#"{"compoundVariants": []}"#,
        r#"{"defaultVariants": {}}"#,
        r#"{"base": {}, "variants": {}, "compoundVariants": [], "defaultVariants": {}}"#,
        r#"{"base": null}"#,
        r#"{"variants": null}"#,
        r#"{"compoundVariants": null}"#,
        r#"{"defaultVariants": null}"#,
        r#"{"base": null, "variants": null, "compoundVariants": null, "defaultVariants": null}"#,
    ];
    let resolvers: Vec<Resolver> = sources
        .iter()
        .map(|source| bato(VariantConfig::from_json(source).unwrap()))
        .collect();

    check(&resolvers, None, "");
    check(&resolvers, Some(Props::new()), "");
    check(&resolvers, Some(Props::new().set("aCheekyInvalidProp", "lol")), "");
    check(&resolvers, Some(Props::new().set("intent", "secondary")), "");
    check(&resolvers, Some(Props::new().set("disabled", true)), "");
    check(
        &resolvers,
        Some(Props::new().set("intent", "warning").set("size", "large")),
        "",
    );
    check(&resolvers, Some(Props::new().set("m", 0)), "");
    check(
        &resolvers,
        Some(Props::new().set("m", 1).class("adhoc-class")),
        "adhoc-class",
    );
    check(
        &resolvers,
        Some(Props::new().set("m", 1).class_name("adhoc-classname")),
        "adhoc-classname",
    );
}

#[test]
fn test_without_config() {
    let example = bato(VariantConfig::new());
    assert_eq!(example.defaults(), "");
    assert_eq!(
        example
            .apply(&Props::new().set("aCheekyInvalidProp", "lol"))
            .unwrap(),
        ""
    );
    assert_eq!(
        example.apply(&Props::new().class("adhoc-class")).unwrap(),
        "adhoc-class"
    );
    assert_eq!(
        example
            .apply(&Props::new().class_name("adhoc-className"))
            .unwrap(),
        "adhoc-className"
    );
    assert_eq!(
        example
            .apply(
                &Props::new()
                    .class_name("adhoc-className")
                    .class("adhoc-class")
            )
            .unwrap(),
        "adhoc-class adhoc-className"
    );
}

#[test]
fn test_base_only_config_keeps_base_first() {
    let example = bato(VariantConfig::new().base(["box", "box-border"]));
    assert_eq!(example.defaults(), "box box-border");
    assert_eq!(
        example
            .apply(&Props::new().set("margin", 2).class("m-2"))
            .unwrap(),
        "box box-border m-2"
    );
}

#[test]
fn test_end_to_end_compound() {
    let resolver = bato(
        VariantConfig::new()
            .variant("size", [("small", "s"), ("large", "l")])
            .variant("color", [("red", "r"), ("blue", "b")])
            .compound(
                CompoundVariant::new()
                    .when("size", "large")
                    .when("color", "red")
                    .class("big-red"),
            ),
    );

    let out = resolver
        .apply(&Props::new().set("size", "large").set("color", "red"))
        .unwrap();
    assert_eq!(out, "l r big-red");

    let out = resolver
        .apply(&Props::new().set("size", "large").set("color", "blue"))
        .unwrap();
    assert_eq!(out, "l b");
}
