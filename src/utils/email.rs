use lettre::message::{MultiPart, SinglePart, header};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use shopfront_config::EmailConfig;
use shopfront_core::AppError;
use tracing::instrument;

#[derive(Debug, Clone)]
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// `{WEBSERVICE_URL}/auth/validate-email/{token}`
    pub fn validation_link(&self, token: &str) -> String {
        format!("{}/auth/validate-email/{}", self.config.webservice_url, token)
    }

    #[instrument(skip(self, token))]
    pub async fn send_validation_email(
        &self,
        to_email: &str,
        to_name: &str,
        token: &str,
    ) -> Result<(), AppError> {
        let link = self.validation_link(token);

        if !self.config.enabled {
            tracing::info!(to = %to_email, link = %link, "Email sending disabled, validation link logged");
            return Ok(());
        }

        let html_body = self.validation_template(to_name, &link);
        let text_body = format!(
            "Hi {},\n\n\
             Thanks for signing up.\n\n\
             Confirm your email address by opening this link:\n\
             {}\n\n\
             Best regards,\n\
             Shopfront Team",
            to_name, link
        );

        self.send_email(to_email, "Validate your email", &text_body, &html_body)
            .await
    }

    #[instrument(skip(self, html_body, text_body))]
    async fn send_email(
        &self,
        to_email: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), AppError> {
        let from = format!("{} <{}>", self.config.from_name, self.config.from_email);

        let email = Message::builder()
            .from(
                from.parse()
                    .map_err(|e| AppError::internal_error(format!("Invalid from email: {}", e)))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| AppError::internal_error(format!("Invalid to email: {}", e)))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )
            .map_err(|e| AppError::internal_error(format!("Failed to build email: {}", e)))?;

        let mailer = if self.config.smtp_username.is_empty() {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
                .port(self.config.smtp_port)
                .build()
        } else {
            let creds = Credentials::new(
                self.config.smtp_username.clone(),
                self.config.smtp_password.clone(),
            );

            SmtpTransport::relay(&self.config.smtp_host)
                .map_err(|e| {
                    AppError::internal_error(format!("Failed to create SMTP relay: {}", e))
                })?
                .port(self.config.smtp_port)
                .credentials(creds)
                .build()
        };

        // SmtpTransport is blocking.
        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| AppError::internal_error(format!("Task join error: {}", e)))?
            .map_err(|e| AppError::internal_error(format!("Failed to send email: {}", e)))?;

        Ok(())
    }

    fn validation_template(&self, name: &str, link: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Validate your email</title>
</head>
<body style="margin: 0; padding: 0; font-family: Arial, sans-serif; background-color: #f4f4f4;">
    <table width="100%" cellpadding="0" cellspacing="0" style="padding: 20px;">
        <tr>
            <td align="center">
                <table width="600" cellpadding="0" cellspacing="0" style="background-color: #ffffff; border-radius: 8px;">
                    <tr>
                        <td style="background-color: #0F766E; padding: 30px; text-align: center;">
                            <h1 style="margin: 0; color: #ffffff; font-size: 28px;">Shopfront</h1>
                        </td>
                    </tr>
                    <tr>
                        <td style="padding: 40px 30px;">
                            <p style="color: #666666; font-size: 16px;">Hi <strong>{name}</strong>,</p>
                            <p style="color: #666666; font-size: 16px;">Click the button below to validate your email address:</p>
                            <p style="text-align: center; margin: 30px 0;">
                                <a href="{link}" style="padding: 14px 40px; background-color: #0F766E; color: #ffffff; text-decoration: none; border-radius: 6px;">Validate email</a>
                            </p>
                            <p style="color: #666666; font-size: 14px;">Or paste this link into your browser:</p>
                            <p style="color: #0F766E; font-size: 14px; word-break: break-all;">{link}</p>
                        </td>
                    </tr>
                </table>
            </td>
        </tr>
    </table>
</body>
</html>"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> EmailService {
        EmailService::new(EmailConfig {
            webservice_url: "http://localhost:3000/api".to_string(),
            ..EmailConfig::default()
        })
    }

    #[test]
    fn test_validation_link() {
        assert_eq!(
            service().validation_link("abc.def.ghi"),
            "http://localhost:3000/api/auth/validate-email/abc.def.ghi"
        );
    }

    #[test]
    fn test_template_contains_link() {
        let html = service().validation_template("Ada", "http://x/validate");
        assert!(html.contains("Ada"));
        assert_eq!(html.matches("http://x/validate").count(), 2);
    }

    #[tokio::test]
    async fn test_disabled_sending_succeeds() {
        service()
            .send_validation_email("ada@example.com", "Ada", "token")
            .await
            .unwrap();
    }
}
