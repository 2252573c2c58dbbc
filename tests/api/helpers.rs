use std::time::Duration;

use url::Url;

use wiremock::MockServer;

use registration_form::client::RegistrationClient;
use registration_form::form::{Field, FormState};
use registration_form::telemetry;

lazy_static::lazy_static! {
    static ref TRACING: () = {
        let filter = "debug";
        // Set `TEST_LOG` to see logs from the tests
        if std::env::var("TEST_LOG").is_ok() {
            let subscriber = telemetry::create_subscriber(filter, std::io::stdout);
            telemetry::set_subscriber(subscriber).expect("Failed to set subscriber");
        } else {
            let subscriber = telemetry::create_subscriber(filter, std::io::sink);
            telemetry::set_subscriber(subscriber).expect("Failed to set subscriber");
        }
    };
}

/// Form input, one optional raw value per field
#[derive(Debug, Clone)]
pub struct Registrant {
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub age: Option<String>,
    pub fiscal_code: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Registrant {
    pub fn valid() -> Self {
        Self {
            given_name: Some("Ana".into()),
            family_name: Some("Popescu".into()),
            age: Some("25".into()),
            fiscal_code: Some("RSSMRA85M01H501Z".into()),
            email: Some("a@b.com".into()),
            phone: Some("+1 555-123-4567".into()),
        }
    }

    pub fn without(mut self, field: Field) -> Self {
        *self.slot(field) = None;
        self
    }

    pub fn with(mut self, field: Field, value: &str) -> Self {
        *self.slot(field) = Some(value.into());
        self
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::GivenName => &mut self.given_name,
            Field::FamilyName => &mut self.family_name,
            Field::Age => &mut self.age,
            Field::FiscalCode => &mut self.fiscal_code,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        }
    }
}

pub struct TestForm {
    pub form: FormState<RegistrationClient>,
    pub api_server: MockServer,
}

impl TestForm {
    pub async fn spawn() -> Self {
        Self::spawn_with_display_window(Duration::from_millis(200)).await
    }

    pub async fn spawn_with_display_window(display_window: Duration) -> Self {
        lazy_static::initialize(&TRACING);

        let api_server = MockServer::start().await;

        let client = {
            let api_base_url =
                Url::parse(&api_server.uri()).expect("Failed to parse mock server uri");

            RegistrationClient::new(api_base_url).expect("Failed to create registration client")
        };

        let form = FormState::with_display_window(client, display_window);

        Self { form, api_server }
    }

    /// Type every provided value into the form and touch its field
    pub fn fill(&mut self, registrant: &Registrant) {
        let mut registrant = registrant.clone();
        for field in Field::ALL {
            if let Some(value) = registrant.slot(field).take() {
                self.form.set_value(field, value);
                self.form.touch(field);
            }
        }
    }
}
