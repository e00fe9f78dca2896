//! Usage statistics shown on the stats screen
//!
//! All figures are precomputed; there is no aggregation pipeline behind them.

/// Daily call count that fills a call bar completely
pub const CALL_BAR_SCALE: f32 = 7.0;

/// Activity for one weekday
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityDay {
    pub day: &'static str,
    pub messages: u32,
    pub calls: u32,
}

/// A summary card with a progress bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: u32,
    /// Progress in percent
    pub progress: u8,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Achievement {
    pub icon: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

/// Usage totals and weekly activity
#[derive(Debug, Clone, PartialEq)]
pub struct UsageStats {
    pub total_messages: u32,
    pub total_calls: u32,
    pub total_video_calls: u32,
    /// Total call time in minutes
    pub total_call_minutes: u32,
    pub contacts: u32,
    pub groups: u32,
    pub channels: u32,
    pub week: Vec<ActivityDay>,
}

impl Default for UsageStats {
    fn default() -> Self {
        Self {
            total_messages: 3245,
            total_calls: 127,
            total_video_calls: 48,
            total_call_minutes: 1847,
            contacts: 156,
            groups: 8,
            channels: 12,
            week: vec![
                ActivityDay { day: "ПН", messages: 45, calls: 3 },
                ActivityDay { day: "ВТ", messages: 62, calls: 5 },
                ActivityDay { day: "СР", messages: 38, calls: 2 },
                ActivityDay { day: "ЧТ", messages: 71, calls: 7 },
                ActivityDay { day: "ПТ", messages: 89, calls: 6 },
                ActivityDay { day: "СБ", messages: 52, calls: 4 },
                ActivityDay { day: "ВС", messages: 34, calls: 1 },
            ],
        }
    }
}

impl UsageStats {
    /// Whole hours spent in calls
    pub fn call_hours(&self) -> u32 {
        self.total_call_minutes / 60
    }

    /// Busiest day's message count
    pub fn max_daily_messages(&self) -> u32 {
        self.week.iter().map(|d| d.messages).max().unwrap_or(0)
    }

    /// Bar lengths in `0.0..=1.0` for each day: (messages, calls)
    pub fn normalized_week(&self) -> Vec<(f32, f32)> {
        let max = self.max_daily_messages();
        self.week
            .iter()
            .map(|d| {
                let messages = if max == 0 {
                    0.0
                } else {
                    d.messages as f32 / max as f32
                };
                (messages, d.calls as f32 / CALL_BAR_SCALE)
            })
            .collect()
    }

    pub fn summary_cards(&self) -> [SummaryCard; 3] {
        [
            SummaryCard { title: "Контакты", value: self.contacts, progress: 75, caption: "+12 за неделю" },
            SummaryCard { title: "Группы", value: self.groups, progress: 40, caption: "2 активные" },
            SummaryCard { title: "Каналы", value: self.channels, progress: 60, caption: "5 Premium" },
        ]
    }

    pub fn achievements(&self) -> [Achievement; 4] {
        [
            Achievement { icon: "⭐", title: "Активный собеседник", caption: "1000+ сообщений" },
            Achievement { icon: "⚡", title: "Быстрый ответ", caption: "Средний ответ < 1 мин" },
            Achievement { icon: "👑", title: "Premium пользователь", caption: "Безлимитные звонки" },
            Achievement { icon: "❤", title: "Верный друг", caption: "100+ дней в приложении" },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_hours_round_down() {
        assert_eq!(UsageStats::default().call_hours(), 30);
    }

    #[test]
    fn test_busiest_day_fills_bar() {
        let stats = UsageStats::default();
        assert_eq!(stats.max_daily_messages(), 89);

        let bars = stats.normalized_week();
        assert_eq!(bars.len(), 7);
        // Friday has 89 messages
        assert_eq!(bars[4].0, 1.0);
        assert!(bars.iter().all(|(m, _)| *m > 0.0 && *m <= 1.0));
    }

    #[test]
    fn test_call_bars_use_fixed_scale() {
        let bars = UsageStats::default().normalized_week();
        // Thursday has 7 calls, Sunday 1
        assert_eq!(bars[3].1, 1.0);
        assert!((bars[6].1 - 1.0 / 7.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_empty_week_does_not_divide_by_zero() {
        let stats = UsageStats {
            week: vec![ActivityDay { day: "ПН", messages: 0, calls: 0 }],
            ..UsageStats::default()
        };
        assert_eq!(stats.normalized_week(), vec![(0.0, 0.0)]);
    }
}
