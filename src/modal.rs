//! Single-flight modal prompts.
//!
//! At most one modal is pending at a time. Showing a new one replaces the
//! previous prompt outright; the replaced callback is dropped, never invoked
//! with a cancel. A settled prompt is consumed by exactly one `tick`, which
//! resets the controller before handing the callback back to the caller so
//! nothing in the same frame can observe stale modal state.

/// What kind of prompt is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    /// Single acknowledgement button, no input.
    Message,
    /// Free text entry.
    Input,
    /// Masked text entry.
    Password,
}

/// Outcome of user interaction with the pending prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptResult {
    Waiting,
    Failure,
    Success,
}

/// Resolution continuation: `Some(input)` on success, `None` on failure or
/// cancel. Invoked with the owning context exactly once.
pub type ModalResolve<C> = Box<dyn FnOnce(&mut C, Option<String>)>;

struct Prompt<C> {
    kind: ModalKind,
    title: String,
    caption: String,
    max_input_len: usize,
    allow_cancel: bool,
    result: PromptResult,
    on_resolve: Option<ModalResolve<C>>,
}

/// Serializes modal prompts for the frame loop.
pub struct ModalController<C> {
    prompt: Option<Prompt<C>>,
    input: String,
}

impl<C> Default for ModalController<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ModalController<C> {
    pub fn new() -> Self {
        Self {
            prompt: None,
            input: String::new(),
        }
    }

    /// Whether a prompt is pending.
    pub fn active(&self) -> bool {
        self.prompt.is_some()
    }

    pub fn kind(&self) -> Option<ModalKind> {
        self.prompt.as_ref().map(|p| p.kind)
    }

    pub fn title(&self) -> &str {
        self.prompt.as_ref().map_or("", |p| p.title.as_str())
    }

    pub fn caption(&self) -> &str {
        self.prompt.as_ref().map_or("", |p| p.caption.as_str())
    }

    pub fn allow_cancel(&self) -> bool {
        self.prompt.as_ref().is_some_and(|p| p.allow_cancel)
    }

    /// Text captured so far for input-style prompts.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the confirm affordance is currently usable: input-style
    /// prompts require non-empty text.
    pub fn can_confirm(&self) -> bool {
        match self.kind() {
            Some(ModalKind::Message) => true,
            Some(ModalKind::Input | ModalKind::Password) => !self.input.is_empty(),
            None => false,
        }
    }

    /// Show a prompt, replacing any pending one. The replaced prompt's
    /// callback is silently dropped.
    pub fn show(
        &mut self,
        title: impl Into<String>,
        caption: impl Into<String>,
        kind: ModalKind,
        max_input_len: usize,
        allow_cancel: bool,
        on_resolve: ModalResolve<C>,
    ) {
        self.input.clear();
        self.prompt = Some(Prompt {
            kind,
            title: title.into(),
            caption: caption.into(),
            max_input_len,
            allow_cancel,
            result: PromptResult::Waiting,
            on_resolve: Some(on_resolve),
        });
    }

    /// Append a character to the captured input, respecting the prompt's
    /// maximum length. Ignored for message prompts.
    pub fn push_char(&mut self, c: char) {
        let Some(prompt) = &self.prompt else { return };
        if prompt.kind == ModalKind::Message || prompt.result != PromptResult::Waiting {
            return;
        }
        if self.input.chars().count() < prompt.max_input_len {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        let Some(prompt) = &self.prompt else { return };
        if prompt.result != PromptResult::Waiting {
            return;
        }
        self.input.pop();
    }

    /// Mark the pending prompt successful. No-op when the confirm affordance
    /// is unavailable (input-style prompt with empty text) or nothing is
    /// waiting.
    pub fn confirm(&mut self) {
        if !self.can_confirm() {
            return;
        }
        if let Some(prompt) = &mut self.prompt {
            if prompt.result == PromptResult::Waiting {
                prompt.result = PromptResult::Success;
            }
        }
    }

    /// Mark the pending prompt cancelled. Only legal while waiting and when
    /// the prompt allows cancelling.
    pub fn cancel(&mut self) {
        if let Some(prompt) = &mut self.prompt {
            if prompt.result == PromptResult::Waiting && prompt.allow_cancel {
                prompt.result = PromptResult::Failure;
            }
        }
    }

    /// Consume a settled prompt. Returns the callback and the value it must
    /// be invoked with (`Some(input)` on success, `None` otherwise). The
    /// controller is fully reset before returning.
    pub fn tick(&mut self) -> Option<(ModalResolve<C>, Option<String>)> {
        let settled = matches!(
            self.prompt.as_ref().map(|p| p.result),
            Some(PromptResult::Success | PromptResult::Failure)
        );
        if !settled {
            return None;
        }

        let prompt = self.prompt.take().expect("settled prompt present");
        let value = if prompt.result == PromptResult::Success {
            Some(std::mem::take(&mut self.input))
        } else {
            self.input.clear();
            None
        };
        let resolve = prompt.on_resolve.expect("prompt resolved twice");
        Some((resolve, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Ctx;

    fn recording_cb(log: &Rc<RefCell<Vec<Option<String>>>>) -> ModalResolve<Ctx> {
        let log = Rc::clone(log);
        Box::new(move |_ctx, value| log.borrow_mut().push(value))
    }

    #[test]
    fn message_prompt_resolves_with_input_on_confirm() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut modal: ModalController<Ctx> = ModalController::new();
        modal.show("Attention", "hello", ModalKind::Message, 0, false, recording_cb(&log));

        assert!(modal.tick().is_none(), "waiting prompt is not consumed");
        modal.confirm();

        let (cb, value) = modal.tick().expect("settled prompt consumed");
        assert!(!modal.active(), "controller reset before callback runs");
        cb(&mut Ctx, value);
        assert_eq!(*log.borrow(), vec![Some(String::new())]);
        assert!(modal.tick().is_none(), "resolution happens exactly once");
    }

    #[test]
    fn cancel_resolves_with_none() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut modal: ModalController<Ctx> = ModalController::new();
        modal.show("Auth", "password", ModalKind::Password, 32, true, recording_cb(&log));
        modal.push_char('x');
        modal.cancel();

        let (cb, value) = modal.tick().unwrap();
        cb(&mut Ctx, value);
        assert_eq!(*log.borrow(), vec![None]);
        assert_eq!(modal.input(), "", "captured input cleared on failure");
    }

    #[test]
    fn confirm_rejected_while_input_empty() {
        let mut modal: ModalController<Ctx> = ModalController::new();
        modal.show("Auth", "password", ModalKind::Password, 32, true, Box::new(|_, _| {}));

        assert!(!modal.can_confirm());
        modal.confirm();
        assert!(modal.tick().is_none(), "empty input cannot confirm");

        modal.push_char('a');
        assert!(modal.can_confirm());
        modal.confirm();
        assert!(modal.tick().is_some());
    }

    #[test]
    fn cancel_ignored_when_not_allowed() {
        let mut modal: ModalController<Ctx> = ModalController::new();
        modal.show("Attention", "notice", ModalKind::Message, 0, false, Box::new(|_, _| {}));
        modal.cancel();
        assert!(modal.tick().is_none());
    }

    #[test]
    fn showing_second_prompt_drops_first_callback() {
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));
        let mut modal: ModalController<Ctx> = ModalController::new();

        modal.show("One", "first", ModalKind::Input, 8, true, recording_cb(&first));
        modal.push_char('a');
        modal.show("Two", "second", ModalKind::Input, 8, true, recording_cb(&second));

        assert_eq!(modal.input(), "", "input reset by the new prompt");
        modal.push_char('b');
        modal.confirm();

        let (cb, value) = modal.tick().unwrap();
        cb(&mut Ctx, value);
        assert!(first.borrow().is_empty(), "superseded callback never invoked");
        assert_eq!(*second.borrow(), vec![Some("b".to_string())]);
    }

    #[test]
    fn settled_prompt_input_is_frozen_until_consumed() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut modal: ModalController<Ctx> = ModalController::new();
        modal.show("Auth", "password", ModalKind::Password, 32, true, recording_cb(&log));

        for c in "abc".chars() {
            modal.push_char(c);
        }
        modal.confirm();

        // Edits after settling must not change what the callback sees.
        modal.backspace();
        modal.push_char('d');

        let (cb, value) = modal.tick().unwrap();
        cb(&mut Ctx, value);
        assert_eq!(*log.borrow(), vec![Some("abc".to_string())]);
    }

    #[test]
    fn input_respects_max_length() {
        let mut modal: ModalController<Ctx> = ModalController::new();
        modal.show("In", "type", ModalKind::Input, 3, true, Box::new(|_, _| {}));
        for c in "abcdef".chars() {
            modal.push_char(c);
        }
        assert_eq!(modal.input(), "abc");
    }
}
