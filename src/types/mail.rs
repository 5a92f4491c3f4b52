use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct SendEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: Option<String>,
    pub text: Option<String>,
    pub cc: Option<Vec<String>>,
    pub bcc: Option<Vec<String>>,
    pub reply_to: Option<Vec<String>>,
}

impl Default for SendEmail {
    fn default() -> Self {
        Self {
            from: "noreply@example.com".to_string(),
            to: vec![],
            subject: "".to_string(),
            html: None,
            text: None,
            cc: None,
            bcc: None,
            reply_to: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RSendMail {
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EmailDetails {
    pub recipient: String,
    pub message: String,
    pub signed: bool,
    pub time: String,
    pub signature: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SendMailRes {
    #[serde(rename = "emailDetails")]
    pub email_details: EmailDetails,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RVerifySignature {
    pub message: String,
    pub signature: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct VerifySignatureRes {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
}
