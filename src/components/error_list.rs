use leptos::{component, create_signal, IntoView, Signal, SignalGet, SignalUpdate, view};
use crate::error::{ImportError, MissingTimeWarning};

#[component]
fn IssueListPopover(
    issues: Signal<Vec<ImportError>>,
    warnings: Signal<Vec<MissingTimeWarning>>,
) -> impl IntoView {
    view! {
        <div class="error-list-popover">
            <div class="error-list-content">
                {move || {
                    let current_issues = issues.get();
                    let current_warnings = warnings.get();
                    if current_issues.is_empty() && current_warnings.is_empty() {
                        return view! { <p class="no-errors">"No problems found"</p> }.into_view();
                    }

                    let issue_items = current_issues.into_iter().map(|issue| view! {
                        <div class="error-item">
                            <div class="error-item-header">
                                <i class="fa-solid fa-file-circle-exclamation"></i>
                                <span class="error-type">"Skipped"</span>
                            </div>
                            <div class="error-detail">
                                <span class="value">{issue.to_string()}</span>
                            </div>
                        </div>
                    });

                    let warning_items = current_warnings.into_iter().map(|warning| view! {
                        <div class="error-item">
                            <div class="error-item-header">
                                <i class="fa-solid fa-triangle-exclamation"></i>
                                <span class="error-type">"Not drawn"</span>
                            </div>
                            <div class="error-detail">
                                <span class="value">{warning.to_string()}</span>
                            </div>
                        </div>
                    });

                    view! {
                        <div class="error-items">
                            {issue_items.collect::<Vec<_>>()}
                            {warning_items.collect::<Vec<_>>()}
                        </div>
                    }.into_view()
                }}
            </div>
        </div>
    }
}

/// Button with a count badge that opens the list of import issues and render warnings
#[component]
pub fn ErrorList(
    issues: Signal<Vec<ImportError>>,
    warnings: Signal<Vec<MissingTimeWarning>>,
) -> impl IntoView {
    let (is_open, set_is_open) = create_signal(false);
    let count = move || issues.get().len() + warnings.get().len();

    view! {
        <div class="error-list-container">
            <button
                class="error-list-button"
                class:has-errors={move || count() > 0}
                on:click=move |_| set_is_open.update(|open| *open = !*open)
                title="Import issues and drawing warnings"
            >
                <i class="fa-solid fa-triangle-exclamation"></i>
                {move || {
                    let n = count();
                    (n > 0).then(|| view! { <span class="error-count">{n}</span> })
                }}
            </button>
            {move || is_open.get().then(|| view! { <IssueListPopover issues=issues warnings=warnings /> })}
        </div>
    }
}
