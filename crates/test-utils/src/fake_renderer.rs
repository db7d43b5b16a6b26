use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use taskline::errors::Result;
use taskline::render::Renderer;
use taskline::timeline::TimelineLayout;

/// A fake renderer that records every layout and error it is handed,
/// instead of drawing to a terminal.
#[derive(Clone, Default)]
pub struct FakeRenderer {
    pub layouts: Arc<Mutex<Vec<Arc<TimelineLayout>>>>,
    pub errors: Arc<Mutex<Vec<String>>>,
}

impl FakeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered(&self) -> Vec<Arc<TimelineLayout>> {
        self.layouts.lock().unwrap().clone()
    }

    pub fn reported(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Renderer for FakeRenderer {
    fn render(
        &mut self,
        layout: Arc<TimelineLayout>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let layouts = Arc::clone(&self.layouts);
        Box::pin(async move {
            layouts.lock().unwrap().push(layout);
            Ok(())
        })
    }

    fn report_error(
        &mut self,
        message: String,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let errors = Arc::clone(&self.errors);
        Box::pin(async move {
            errors.lock().unwrap().push(message);
            Ok(())
        })
    }
}
