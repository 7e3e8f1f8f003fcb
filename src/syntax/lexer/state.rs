//! Lexer state management and template substitution tracking

use super::Lexer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum LexerState {
    Normal,
    /// Inside one or more `${ ... }` template substitutions.
    /// Each stack entry counts the braces open in that substitution,
    /// including the `{` of `${` itself.
    InTemplate { depth_stack: Vec<usize> },
}

impl Lexer {
    pub(super) fn in_template_context(&self) -> bool {
        matches!(
            &self.state,
            LexerState::InTemplate { depth_stack } if !depth_stack.is_empty()
        )
    }

    pub(super) fn current_substitution_depth(&self) -> usize {
        match &self.state {
            LexerState::InTemplate { depth_stack } => depth_stack.last().copied().unwrap_or(0),
            LexerState::Normal => 0,
        }
    }

    /// A `}` at depth one closes the substitution and resumes template text.
    pub(super) fn at_template_resume(&self) -> bool {
        self.in_template_context() && self.current_substitution_depth() == 1
    }

    pub(super) fn clear_template_state(&mut self) {
        self.state = LexerState::Normal;
    }

    pub(super) fn enter_template_substitution(&mut self) {
        match &mut self.state {
            LexerState::Normal => {
                self.state = LexerState::InTemplate {
                    depth_stack: vec![1],
                };
            }
            LexerState::InTemplate { depth_stack } => depth_stack.push(1),
        }
    }

    pub(super) fn exit_template(&mut self) {
        let mut should_reset = false;
        if let LexerState::InTemplate { depth_stack } = &mut self.state {
            depth_stack.pop();
            should_reset = depth_stack.is_empty();
        }
        if should_reset {
            self.clear_template_state();
        }
    }

    pub(super) fn increment_substitution_depth(&mut self) {
        if let LexerState::InTemplate { depth_stack } = &mut self.state
            && let Some(depth) = depth_stack.last_mut()
        {
            *depth += 1;
        }
    }

    pub(super) fn decrement_substitution_depth(&mut self) {
        if let LexerState::InTemplate { depth_stack } = &mut self.state
            && let Some(depth) = depth_stack.last_mut()
        {
            *depth = depth.saturating_sub(1);
        }
    }
}
