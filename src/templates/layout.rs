use maud::{html, Markup, PreEscaped, DOCTYPE};

// Styles are inlined so the service stays a single binary with no static
// file routes.
const STYLE: &str = "
    body { font-family: system-ui, sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; color: #222; }
    header { display: flex; align-items: baseline; justify-content: space-between; border-bottom: 1px solid #ddd; padding-bottom: 0.75rem; }
    nav ul { list-style: none; display: flex; gap: 1rem; margin: 0; padding: 0; }
    h1 { font-size: 1.6rem; }
    code, pre { background: #f4f4f4; border-radius: 6px; }
    code { padding: 0.15rem 0.35rem; }
    pre { padding: 0.75rem; overflow-x: auto; }
    dt { margin-top: 0.75rem; }
    dd { margin: 0.25rem 0 0.5rem 1rem; color: #444; }
";

pub fn page_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    h3 { "Auction Analysis" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/analysis/sample" { "Sample analysis" } }
                        }
                    }
                }
                main { (content) }
            }
        }
    }
}
