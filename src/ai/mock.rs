use super::PortraitEditService;
use crate::models::{EditedPortrait, UploadedImage};
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockPortraitEditClient {
    responses: Arc<Mutex<Vec<EditedPortrait>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockPortraitEditClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response(self, response: EditedPortrait) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockPortraitEditClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PortraitEditService for MockPortraitEditClient {
    async fn edit_portrait(
        &self,
        _source: &UploadedImage,
        career: Option<&str>,
    ) -> Result<EditedPortrait> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response: a tiny PNG payload plus a canned rationale.
            Ok(EditedPortrait {
                image: "data:image/png;base64,iVBORw0KGgo=".to_string(),
                title: career.unwrap_or("Mock Career").to_string(),
                description: "Swapped the outfit for a mock uniform.".to_string(),
            })
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
