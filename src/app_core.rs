use std::cell::RefCell;
use std::rc::Rc;

use tagbox_core::TagSetEditor;

pub(crate) type EditorSubscriber = Rc<dyn Fn()>;

/// View-model for the tag editor, constructed once per page load. All
/// mutations funnel through here; views observe it through cloned
/// snapshots and change subscriptions.
pub(crate) struct EditorCore {
    state: RefCell<EditorState>,
    subscribers: Rc<RefCell<Vec<EditorSubscriber>>>,
}

struct EditorState {
    editor: TagSetEditor,
    loading: bool,
    fetch_error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct EditorSnapshot {
    pub(crate) tags: Vec<String>,
    pub(crate) pending: String,
    pub(crate) loading: bool,
    pub(crate) fetch_error: Option<String>,
}

impl EditorCore {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(EditorState {
                editor: TagSetEditor::new(),
                loading: false,
                fetch_error: None,
            }),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub(crate) fn subscribe(&self, subscriber: EditorSubscriber) -> EditorSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        EditorSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    fn notify(&self) {
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }

    pub(crate) fn snapshot(&self) -> EditorSnapshot {
        let state = self.state.borrow();
        EditorSnapshot {
            tags: state.editor.tags().to_vec(),
            pending: state.editor.pending().to_string(),
            loading: state.loading,
            fetch_error: state.fetch_error.clone(),
        }
    }

    pub(crate) fn seed_tags<I>(&self, seed: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.state.borrow_mut().editor.initialize(seed);
        self.notify();
    }

    pub(crate) fn input_changed(&self, buffer: &str) {
        self.state.borrow_mut().editor.input_changed(buffer);
        self.notify();
    }

    pub(crate) fn remove_tag(&self, tag: &str) {
        self.state.borrow_mut().editor.remove_tag(tag);
        self.notify();
    }

    pub(crate) fn style_for(&self, tag: &str) -> &'static [&'static str] {
        self.state.borrow().editor.style_for(tag)
    }

    pub(crate) fn begin_fetch(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.loading = true;
            state.fetch_error = None;
        }
        self.notify();
    }

    // Loading clears on both outcomes; a failure leaves a retryable error.
    pub(crate) fn finish_fetch(&self, result: Result<Vec<String>, String>) {
        {
            let mut state = self.state.borrow_mut();
            state.loading = false;
            match result {
                Ok(tags) => {
                    state.fetch_error = None;
                    state.editor.initialize(tags);
                }
                Err(message) => state.fetch_error = Some(message),
            }
        }
        self.notify();
    }
}

pub(crate) struct EditorSubscription {
    subscriber: EditorSubscriber,
    subscribers: Rc<RefCell<Vec<EditorSubscriber>>>,
}

impl Drop for EditorSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}
