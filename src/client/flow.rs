use std::time::Duration;

use log::{error, info};

use crate::client::api::SignupApi;
use crate::client::form::{SignupForm, SubmitBlocked, SUCCESS_NOTICE_DELAY};

pub trait Navigator: Send {
    fn push(&mut self, path: &str);
}

pub struct SignupFlow<A> {
    api: A,
    notice_delay: Duration,
}

impl<A: SignupApi> SignupFlow<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            notice_delay: SUCCESS_NOTICE_DELAY,
        }
    }

    pub fn with_notice_delay(mut self, delay: Duration) -> Self {
        self.notice_delay = delay;
        self
    }

    /// Sends the form once and records the outcome on it. Returns without a
    /// request when the form is already submitting or incomplete.
    pub async fn submit(&self, form: &mut SignupForm) -> Result<(), SubmitBlocked> {
        let request = form.begin_submit()?;
        let outcome = self.api.submit(&request).await;

        match &outcome {
            Ok(()) => info!("Signed up {} for {}", request.email, request.date),
            Err(e) => error!("Failed to submit webinar form: {}", e),
        }
        form.complete(outcome);
        Ok(())
    }

    /// After a success, keeps the notice up for the delay then sends the user
    /// home. Does nothing for any other state.
    pub async fn settle<N: Navigator>(&self, form: &mut SignupForm, navigator: &mut N) {
        if form.notice().is_none() {
            return;
        }
        tokio::time::sleep(self.notice_delay).await;
        form.dismiss_notice();
        navigator.push("/");
    }

    pub async fn run<N: Navigator>(
        &self,
        form: &mut SignupForm,
        navigator: &mut N,
    ) -> Result<(), SubmitBlocked> {
        self.submit(form).await?;
        self.settle(form, navigator).await;
        Ok(())
    }
}
