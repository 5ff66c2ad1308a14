use crate::output::Output;

/// Pretty output token
///
/// Like [`OutputToken`](`crate::output::OutputToken`) but with extra
/// information for indented output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrettyOutputToken {
    /// indentation level.
    pub indentation: usize,
    /// Whether the token is prefixed by a space character.
    pub space: bool,
    /// The token
    ///
    /// This is a fragment of HTML like `"<p"`, `a="A"` or `"</p>"`.
    pub text: String,
    /// Whether the token is suffixed by a newline character.
    pub newline: bool,
}

// Every start tag, end tag, text and comment goes on its own line. The stack
// holds the names of the open non-void elements; its depth is the
// indentation level of the next line.
pub(crate) struct Pretty<'a> {
    initial: usize,
    stack: Vec<&'a str>,
}

impl<'a> Pretty<'a> {
    pub(crate) fn new(initial: usize) -> Self {
        Pretty {
            initial,
            stack: Vec::new(),
        }
    }

    fn get_indentation(&self) -> usize {
        self.initial.saturating_add(self.stack.len())
    }

    pub(crate) fn prettify(&mut self, output: &Output<'a>) -> (usize, bool) {
        use Output::*;
        match output {
            StartTagOpen(_) => (self.get_indentation(), false),
            Text(_) | Comment(_) => (self.get_indentation(), true),
            StartTagClose(element) => {
                let element = *element;
                if !element.is_void() {
                    self.stack.push(element.name());
                }
                (0, true)
            }
            EndTag(_) => {
                self.stack.pop();
                (self.get_indentation(), true)
            }
            Attribute(..) => (0, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::htmldata::Html;
    use crate::output::gen_outputs;

    #[test]
    fn test_levels() {
        let mut html = Html::new();
        let root = html
            .parse("<ul><li>a<br></li></ul>")
            .unwrap()
            .nodes()[0];
        let mut pretty = Pretty::new(1);
        let levels = gen_outputs(&html, root)
            .map(|(_, output)| pretty.prettify(&output))
            .collect::<Vec<_>>();
        assert_eq!(
            levels,
            vec![
                (1, false), // <ul
                (0, true),  // >
                (2, false), // <li
                (0, true),  // >
                (3, true),  // a
                (3, false), // <br
                (0, true),  // >
                (2, true),  // </li>
                (1, true),  // </ul>
            ]
        );
    }
}
