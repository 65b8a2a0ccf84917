use dioxus::prelude::*;

#[component]
pub fn Navbar(on_home: EventHandler<()>) -> Element {
    rsx! {
        nav {
            class: "bg-white border-b border-slate-200 sticky top-0 z-50",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div {
                    class: "flex justify-between h-16 items-center",
                    div {
                        class: "flex items-center cursor-pointer",
                        onclick: move |_| on_home.call(()),
                        div { class: "bg-sky-600 p-2 rounded-lg text-white", "📈" }
                        span {
                            class: "ml-3 text-xl font-bold text-slate-900 tracking-tight",
                            "SEO Master "
                            span { class: "text-sky-600", "AI" }
                        }
                    }
                    div {
                        class: "hidden md:flex text-sm text-slate-500",
                        span { class: "flex items-center gap-1", "🔒 Secure Audit" }
                    }
                }
            }
        }
    }
}
