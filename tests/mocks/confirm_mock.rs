use wasm_bindgen::prelude::*;

/// Replaces `window.confirm` so deletion tests do not block on a dialog.
/// Every prompt is recorded in `window.confirmPrompts`.
#[wasm_bindgen(inline_js = r#"
export function setup_confirm_mock(answer) {
    window.confirmPrompts = [];
    window.confirm = function(message) {
        console.log("[MOCK CONFIRM] Asked:", message, "answering", answer);
        window.confirmPrompts.push(message);
        return answer;
    };
    return true;
}

export function confirm_prompt_count() {
    return (window.confirmPrompts || []).length;
}
"#)]
extern "C" {
    fn setup_confirm_mock(answer: bool) -> bool;
    fn confirm_prompt_count() -> usize;
}

pub fn answer_confirm_with(answer: bool) -> bool {
    setup_confirm_mock(answer)
}

pub fn prompts_seen() -> usize {
    confirm_prompt_count()
}
