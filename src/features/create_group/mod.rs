//! Create Study Group Feature

pub mod controller;
pub mod page;

pub use controller::*;
pub use page::*;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use futures::FutureExt;
    use futures::future::BoxFuture;

    use crate::domain::CreateStudyGroupRequest;
    use crate::error::{Error, Result};
    use crate::services::{ApiReply, StudyGroupApi};

    /// What the fake backend does with every request
    pub enum Script {
        Reply(u16, serde_json::Value),
        Transport,
    }

    /// In-memory backend recording the requests it receives
    pub struct FakeApi {
        script: Script,
        requests: Mutex<Vec<CreateStudyGroupRequest>>,
    }

    impl FakeApi {
        pub fn new(script: Script) -> Self {
            Self {
                script,
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn requests(&self) -> Vec<CreateStudyGroupRequest> {
            self.requests.lock().expect("requests lock").clone()
        }
    }

    impl StudyGroupApi for FakeApi {
        fn create_study_group<'a>(
            &'a self,
            request: &'a CreateStudyGroupRequest,
        ) -> BoxFuture<'a, Result<ApiReply>> {
            self.requests
                .lock()
                .expect("requests lock")
                .push(request.clone());

            let result = match &self.script {
                Script::Reply(status, body) => Ok(ApiReply::new(*status, body.clone())),
                Script::Transport => Err(Error::Io {
                    source: std::io::Error::new(
                        std::io::ErrorKind::ConnectionRefused,
                        "connection refused",
                    ),
                }),
            };
            async move { result }.boxed()
        }
    }
}
