//! Sign-in / sign-up screen
//!
//! Validation is local only; there is no account backend.

use crate::coordinator::ViewCoordinator;
use crate::ui::theme::Palette;
use egui::{Color32, Rounding, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Reasons a sign-in form is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Введите email")]
    MissingEmail,

    #[error("Некорректный email")]
    InvalidEmail,

    #[error("Введите пароль")]
    MissingPassword,

    #[error("Введите имя")]
    MissingName,
}

/// Contents of the sign-in form
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub name: String,
    pub remember: bool,
    pub error: Option<AuthError>,
}

impl AuthForm {
    /// Switch between login and registration, clearing any stale error
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.error = None;
    }

    pub fn validate(&self) -> Result<(), AuthError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(AuthError::MissingEmail);
        }
        if !is_plausible_email(email) {
            return Err(AuthError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(AuthError::MissingPassword);
        }
        if self.mode == AuthMode::Register && self.name.trim().is_empty() {
            return Err(AuthError::MissingName);
        }
        Ok(())
    }
}

/// Text on both sides of an `@`
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

pub fn show(coordinator: &mut ViewCoordinator, ctx: &egui::Context) {
    let mut submit = false;

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(Palette::background(&ctx.style().visuals)))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space((ui.available_height() * 0.12).max(24.0));

                egui::Frame::none()
                    .fill(Palette::surface(ui.visuals()))
                    .rounding(Rounding::same(16.0))
                    .inner_margin(egui::Margin::same(32.0))
                    .show(ui, |ui| {
                        ui.set_width(380.0);
                        let form = coordinator.auth_form_mut();

                        ui.vertical_centered(|ui| {
                            ui.label(egui::RichText::new("💬").size(48.0).color(Palette::PURPLE));
                            ui.heading(egui::RichText::new("Мессенджер").strong());
                            let subtitle = match form.mode {
                                AuthMode::Login => "Войдите в свой аккаунт",
                                AuthMode::Register => "Создайте новый аккаунт",
                            };
                            ui.label(egui::RichText::new(subtitle).color(Palette::TEXT_SECONDARY));
                        });
                        ui.add_space(20.0);

                        if form.mode == AuthMode::Register {
                            ui.label("Имя");
                            ui.add(
                                egui::TextEdit::singleline(&mut form.name)
                                    .hint_text("Иван Иванов")
                                    .desired_width(f32::INFINITY),
                            );
                            ui.add_space(8.0);
                        }

                        ui.label("Email");
                        ui.add(
                            egui::TextEdit::singleline(&mut form.email)
                                .hint_text("example@mail.com")
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(8.0);

                        ui.label("Пароль");
                        let password = ui.add(
                            egui::TextEdit::singleline(&mut form.password)
                                .password(true)
                                .hint_text("••••••••")
                                .desired_width(f32::INFINITY),
                        );
                        if password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                            submit = true;
                        }

                        if form.mode == AuthMode::Login {
                            ui.add_space(4.0);
                            ui.checkbox(&mut form.remember, "Запомнить меня");
                        }

                        if let Some(error) = &form.error {
                            ui.add_space(4.0);
                            ui.label(egui::RichText::new(error.to_string()).color(Palette::DESTRUCTIVE));
                        }

                        ui.add_space(16.0);
                        let label = match form.mode {
                            AuthMode::Login => "Войти",
                            AuthMode::Register => "Зарегистрироваться",
                        };
                        let button = egui::Button::new(egui::RichText::new(label).color(Color32::WHITE))
                            .fill(Palette::PURPLE)
                            .rounding(Rounding::same(8.0))
                            .min_size(Vec2::new(ui.available_width(), 40.0));
                        if ui.add(button).clicked() {
                            submit = true;
                        }

                        ui.add_space(12.0);
                        ui.horizontal(|ui| {
                            let (question, link) = match form.mode {
                                AuthMode::Login => ("Нет аккаунта?", "Зарегистрироваться"),
                                AuthMode::Register => ("Уже есть аккаунт?", "Войти"),
                            };
                            ui.label(egui::RichText::new(question).color(Palette::TEXT_SECONDARY));
                            if ui.link(egui::RichText::new(link).color(Palette::PURPLE)).clicked() {
                                form.toggle_mode();
                            }
                        });

                        ui.add_space(8.0);
                        ui.label(
                            egui::RichText::new(
                                "Продолжая, вы соглашаетесь с Условиями использования • Политикой конфиденциальности",
                            )
                            .size(11.0)
                            .color(Palette::TEXT_TERTIARY),
                        );
                    });
            });
        });

    if submit {
        if let Err(e) = coordinator.submit_auth() {
            tracing::debug!("Sign-in rejected: {:?}", e);
        }
    }
}
