use dioxus::prelude::*;

const BENEFITS: [&str; 3] = [
    "Unlimited analyses",
    "Printable report export",
    "Advanced fix suggestions",
];

/// Upsell shown once the free tier is used up.
#[component]
pub fn PaywallModal(free_limit: u32, processing: bool, on_purchase: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center p-4 bg-slate-900/70 backdrop-blur-sm",
            div {
                class: "bg-white rounded-2xl shadow-2xl max-w-md w-full overflow-hidden",
                div {
                    class: "bg-sky-600 p-6 text-center",
                    div { class: "w-12 h-12 bg-white/20 rounded-full flex items-center justify-center mx-auto mb-4", "🔒" }
                    h2 { class: "text-2xl font-bold text-white mb-1", "Free limit reached" }
                    p { class: "text-sky-100 text-sm", "You have already analyzed {free_limit} sites for free." }
                }
                div {
                    class: "p-6",
                    p {
                        class: "text-slate-600 text-center mb-6",
                        "Upgrade to the Pro plan to keep analyzing unlimited URLs and get detailed competitor reports."
                    }
                    div {
                        class: "space-y-3 mb-8",
                        for benefit in BENEFITS {
                            div {
                                class: "flex items-center gap-3 text-sm text-slate-700",
                                span { class: "text-green-500", "✓" }
                                span { "{benefit}" }
                            }
                        }
                    }
                    button {
                        class: "w-full bg-slate-900 hover:bg-slate-800 text-white py-3 px-4 rounded-lg font-semibold flex items-center justify-center gap-2 transition-colors disabled:opacity-70",
                        disabled: processing,
                        onclick: move |_| on_purchase.call(()),
                        if processing {
                            "Processing..."
                        } else {
                            "💳 Unlock Pro Access - $5.99"
                        }
                    }
                    p { class: "text-xs text-center text-slate-400 mt-4", "One-time payment. Lifetime access." }
                }
            }
        }
    }
}
