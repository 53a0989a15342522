//! Member Avatar View Model
//!
//! Icon, animation, and color look randomly assigned but are pure
//! functions of the member, stable across sessions and components.

use crate::domain::user::UserProfile;
use platform::hash::{
    AVATAR_COLOR_COUNT, avatar_animation_index, avatar_icon_index, color_index, initial,
};
use rust_decimal::Decimal;

/// Everything the avatar widget renders
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarView {
    /// Fallback initial inside the avatar circle
    pub initial: char,
    /// Index into the UI host's icon set
    pub icon_index: usize,
    /// Index into the UI host's animation styles
    pub animation_index: usize,
    /// Index into the UI host's avatar palette
    pub color_index: usize,
    /// Tier caption under the avatar
    pub tier_label: &'static str,
}

impl AvatarView {
    pub fn from_profile(user: &UserProfile) -> Self {
        Self {
            initial: initial(&user.username),
            icon_index: avatar_icon_index(user.id.value()),
            animation_index: avatar_animation_index(user.id.value()),
            color_index: color_index(&user.username, AVATAR_COLOR_COUNT),
            tier_label: if user.vip_member || user.balance > Decimal::new(100, 0) {
                "VIP Member"
            } else {
                "Member"
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserRole;
    use kernel::id::UserId;

    fn member(id: i64, balance: Decimal) -> UserProfile {
        UserProfile {
            id: UserId::new(id),
            username: "TrafficKing".to_string(),
            email: "t@k.example".to_string(),
            balance,
            clicks_received: 0,
            clicks_given: 0,
            referral_code: "TK7".to_string(),
            role: UserRole::Member,
            active: true,
            vip_member: false,
            vip_expiry: None,
            last_login: None,
            created_at: None,
            daily_login_streak: 0,
        }
    }

    #[test]
    fn test_avatar_is_deterministic_per_member() {
        let a = AvatarView::from_profile(&member(12, Decimal::ZERO));
        let b = AvatarView::from_profile(&member(12, Decimal::ZERO));
        assert_eq!(a, b);
        assert_eq!(a.icon_index, 2); // 12 % 5
        assert_eq!(a.animation_index, 1); // (12 / 10) % 4
        assert_eq!(a.initial, 'T');
    }

    #[test]
    fn test_tier_label() {
        assert_eq!(
            AvatarView::from_profile(&member(1, Decimal::new(50, 0))).tier_label,
            "Member"
        );
        assert_eq!(
            AvatarView::from_profile(&member(1, Decimal::new(150, 0))).tier_label,
            "VIP Member"
        );
    }
}
