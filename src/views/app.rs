use dioxus::prelude::*;

use crate::config::Config;
use crate::controller::SubmitOutcome;
use crate::domain::AppState;
use crate::lifecycle;
use crate::views::home::Home;
use crate::views::navbar::Navbar;
use crate::views::paywall_modal::PaywallModal;
use crate::views::report_view::ReportView;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[component]
pub fn App() -> Element {
    let config = use_hook(Config::from_env);
    use_context_provider({
        let config = config.clone();
        move || lifecycle::build_exporter(&config)
    });
    let mut controller = use_signal(move || lifecycle::build_controller(&config));

    let submit = move |_: ()| {
        let url = controller.read().url().to_string();
        spawn(async move {
            let outcome = controller.write().begin_submit(&url);
            if let SubmitOutcome::Proceed(request) = outcome {
                let gateway = controller.read().gateway();
                let result = gateway.analyze(&request).await;
                controller.write().finish_submit(result);
            }
        });
    };

    let purchase = move |_: ()| {
        spawn(async move {
            if let Err(e) = controller.write().begin_purchase() {
                tracing::error!("{}", e);
                return;
            }
            let checkout = controller.read().checkout();
            checkout.process().await;
            controller.write().unlock();
        });
    };

    let ctrl = controller.read();
    let state = ctrl.state();
    let finished = match state {
        AppState::Success => ctrl.report().cloned(),
        _ => None,
    };
    let url = ctrl.url().to_string();
    let is_pro = ctrl.plan_tier().is_pro();
    let remaining_free = ctrl.remaining_free_analyses();
    let error = match state {
        AppState::Error => ctrl.error_message().map(str::to_string),
        _ => None,
    };
    let paywall_open = ctrl.paywall().is_open();
    let paywall_processing = ctrl.paywall().is_unlocking();
    let free_limit = ctrl.paywall().free_limit();
    let can_submit = ctrl.can_submit();
    drop(ctrl);

    rsx! {
        document::Title { "SEO Master AI" }
        document::Script { src: TAILWIND_CDN }
        div {
            class: "min-h-screen flex flex-col bg-slate-50 font-sans",
            Navbar { on_home: move |_| controller.write().reset() }

            if paywall_open {
                PaywallModal {
                    free_limit,
                    processing: paywall_processing,
                    on_purchase: purchase,
                }
            }

            main {
                class: "flex-grow",
                if let Some(report) = finished {
                    ReportView {
                        report,
                        on_back: move |_| controller.write().reset(),
                    }
                } else {
                    Home {
                        url,
                        is_pro,
                        analyzing: state == AppState::Analyzing,
                        disabled: !can_submit,
                        remaining_free,
                        error,
                        on_input: move |value: String| controller.write().set_url(value),
                        on_submit: submit,
                        on_dismiss_error: move |_| controller.write().dismiss_error(),
                    }
                }
            }
        }
    }
}
