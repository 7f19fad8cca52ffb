//! Builds a small site (home, about, products) and prints each page.
//!
//! Run with `cargo run --example pages [home|about|products]`.

use cinderblock::{Node, attr, elem, text};

const STYLES: &str = "\
body { font-family: Arial, sans-serif; margin: 40px; line-height: 1.6; }
.container { max-width: 800px; margin: 0 auto; }
.nav a { margin-right: 15px; color: #007acc; text-decoration: none; }
.form-group { margin: 15px 0; }
.product-item { margin: 10px 0; padding: 10px; background: white; }
.btn { padding: 10px 20px; background: #007acc; color: white; border: none; }
";

struct Product {
    name: &'static str,
    price: &'static str,
    description: &'static str,
}

const PRODUCTS: &[Product] = &[
    Product {
        name: "Widget",
        price: "$9.99",
        description: "A small, dependable widget.",
    },
    Product {
        name: "Gadget <Pro>",
        price: "$24.50",
        description: "Everything the widget does & more.",
    },
    Product {
        name: "Doohickey",
        price: "$3.00",
        description: "You'll know it when you need it.",
    },
];

fn layout<'a>(title: &'a str, content: impl IntoIterator<Item = Node<'a>>) -> Node<'a> {
    elem::html(
        [attr::lang("en")],
        [
            elem::plain::head([
                elem::meta([attr::charset("UTF-8")]),
                elem::meta([
                    attr::name("viewport"),
                    attr::content("width=device-width, initial-scale=1.0"),
                ]),
                elem::plain::title([text::encoded(title)]),
                elem::plain::style([text::raw(STYLES)]),
            ]),
            elem::plain::body([elem::div(
                [attr::class("container")],
                std::iter::once(elem::plain::h1([text::encoded(title)]))
                    .chain(std::iter::once(nav()))
                    .chain(content),
            )]),
        ],
    )
}

fn nav() -> Node<'static> {
    let links = [
        ("/", "Home"),
        ("/about", "About"),
        ("/products", "Products"),
    ];
    elem::div(
        [attr::class("nav")],
        links
            .into_iter()
            .map(|(href, label)| elem::a([attr::href(href)], [text::encoded(label)])),
    )
}

fn form_group<'a>(id: &'a str, label: &'a str, field: Node<'a>) -> Node<'a> {
    elem::div(
        [attr::class("form-group")],
        [elem::label([attr::for_(id)], [text::encoded(label)]), field],
    )
}

fn home() -> Node<'static> {
    layout(
        "cinderblock examples",
        [
            elem::plain::p([text::encoded(
                "Pages built from plain values, rendered once.",
            )]),
            elem::plain::ul([
                elem::plain::li([text::encoded("Composable HTML generation")]),
                elem::plain::li([text::encoded("Typed attribute handling")]),
                elem::plain::li([text::encoded("Text escaped at construction")]),
            ]),
        ],
    )
}

fn about() -> Node<'static> {
    let text_input = |id: &'static str, kind: &'static str| {
        elem::input([
            attr::type_(kind),
            attr::id(id),
            attr::name(id),
            attr::required(),
        ])
    };

    layout(
        "About",
        [elem::form(
            [attr::action("/contact"), attr::method("POST")],
            [
                form_group("name", "Name:", text_input("name", "text")),
                form_group("email", "Email:", text_input("email", "email")),
                form_group(
                    "message",
                    "Message:",
                    elem::textarea(
                        [
                            attr::id("message"),
                            attr::name("message"),
                            attr::custom("rows", "5"),
                            attr::required(),
                        ],
                        [],
                    ),
                ),
                elem::button(
                    [attr::type_("submit"), attr::class("btn")],
                    [text::encoded("Send Message")],
                ),
            ],
        )],
    )
}

fn products() -> Node<'static> {
    layout(
        "Products",
        [elem::div(
            [attr::class("product-list")],
            PRODUCTS.iter().map(|product| {
                elem::div(
                    [attr::class("product-item")],
                    [
                        elem::h3([attr::class("product-title")], [text::encoded(product.name)]),
                        elem::div([attr::class("product-price")], [text::encoded(product.price)]),
                        elem::p(
                            [attr::class("product-description")],
                            [text::encoded(product.description)],
                        ),
                    ],
                )
            }),
        )],
    )
}

fn main() {
    let page = std::env::args().nth(1);
    let pages: Vec<(&str, Node<'static>)> = match page.as_deref() {
        Some("home") => vec![("home", home())],
        Some("about") => vec![("about", about())],
        Some("products") => vec![("products", products())],
        Some(other) => {
            eprintln!("unknown page {other:?}, expected home, about or products");
            std::process::exit(1);
        }
        None => vec![("home", home()), ("about", about()), ("products", products())],
    };

    for (name, tree) in pages {
        if let Err(e) = tree.validate() {
            eprintln!("{name}: {e}");
            std::process::exit(1);
        }
        println!("<!-- {name} -->");
        println!("{tree}");
    }
}
