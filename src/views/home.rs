use dioxus::prelude::*;

/// Landing screen: hero, URL form, plan status, error banner and features.
#[component]
pub fn Home(
    url: String,
    is_pro: bool,
    analyzing: bool,
    disabled: bool,
    #[props(!optional)] remaining_free: Option<u32>,
    #[props(!optional)] error: Option<String>,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_dismiss_error: EventHandler<()>,
) -> Element {
    let box_class = if is_pro {
        "border-amber-400 ring-2 ring-amber-100"
    } else {
        "border-slate-200"
    };
    let button_class = if is_pro {
        "bg-gradient-to-r from-amber-500 to-orange-600 hover:from-amber-600 hover:to-orange-700"
    } else {
        "bg-sky-600 hover:bg-sky-700"
    };

    rsx! {
        div {
            class: "max-w-4xl mx-auto px-4 pt-16 pb-20 sm:px-6 lg:px-8",

            div {
                class: "text-center mb-12",
                h1 {
                    class: "text-4xl sm:text-5xl font-extrabold text-slate-900 tracking-tight mb-6",
                    "SEO Audit "
                    br {}
                    span { class: "text-sky-600", "Powered by AI" }
                }
                p {
                    class: "text-lg text-slate-600 max-w-2xl mx-auto",
                    "Analyze your site in seconds. Find hidden errors, keyword opportunities and climb the search rankings."
                }
            }

            div {
                class: "max-w-2xl mx-auto bg-white p-2 rounded-2xl shadow-lg border {box_class} mb-8 transition-all",
                form {
                    class: "relative flex items-center",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        on_submit.call(());
                    },
                    span { class: "absolute left-4 text-slate-400", "🔍" }
                    input {
                        class: "w-full pl-12 pr-4 py-4 bg-transparent border-none outline-none text-slate-900 placeholder-slate-400 text-lg rounded-xl",
                        r#type: "url",
                        placeholder: "Enter your site URL (e.g. https://yoursite.com)",
                        required: true,
                        value: "{url}",
                        disabled: disabled,
                        oninput: move |e| on_input.call(e.value()),
                    }
                    button {
                        class: "{button_class} text-white px-8 py-3 rounded-xl font-semibold transition-all disabled:opacity-70 flex items-center gap-2",
                        r#type: "submit",
                        disabled: disabled,
                        if analyzing {
                            div { class: "w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin" }
                            "Analyzing..."
                        } else if is_pro {
                            "★ Analyze Pro"
                        } else {
                            "Analyze"
                        }
                    }
                }
            }

            div {
                class: "flex justify-center mb-12",
                {
                    match remaining_free {
                        None => rsx! {
                            div {
                                class: "bg-amber-50 border border-amber-200 text-amber-800 px-4 py-2 rounded-full text-sm font-medium flex items-center gap-2",
                                "★ PRO plan active: unlimited deep analyses"
                            }
                        },
                        Some(remaining) => rsx! {
                            div { class: "text-sm text-slate-400", "{remaining} free analyses remaining" }
                        },
                    }
                }
            }

            if let Some(message) = error {
                div {
                    class: "max-w-2xl mx-auto mb-8 p-4 bg-red-50 border border-red-200 text-red-700 rounded-lg flex items-center justify-between gap-2",
                    span { "⚠️ {message}" }
                    button {
                        class: "text-red-500 hover:text-red-700 text-sm",
                        onclick: move |_| on_dismiss_error.call(()),
                        "✕"
                    }
                }
            }

            div {
                class: "grid md:grid-cols-3 gap-8 mt-8",
                FeatureCard {
                    icon: "⚡",
                    title: "Speed & Performance",
                    description: "We check load time and Core Web Vitals to make sure visitors get the best experience.",
                }
                FeatureCard {
                    icon: "🧩",
                    title: "On-Page SEO",
                    description: "Deep review of meta tags, heading structure and keyword density.",
                }
                FeatureCard {
                    icon: "📊",
                    title: "Actionable Report",
                    description: "Get a prioritized task list to fix the problems we find.",
                }
            }
        }
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> Element {
    rsx! {
        div {
            class: "bg-white p-6 rounded-xl border border-slate-100 shadow-sm hover:shadow-md transition-shadow",
            div { class: "bg-slate-50 w-12 h-12 rounded-lg flex items-center justify-center mb-4", "{icon}" }
            h3 { class: "font-bold text-slate-900 text-lg mb-2", "{title}" }
            p { class: "text-slate-600 leading-relaxed", "{description}" }
        }
    }
}
