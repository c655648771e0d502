//! RBAC integration tests
//!
//! Exercises the public authorization API the way a caller outside the
//! crate would: role names from the identity provider, owned records from
//! the store, guards around rendered output.

#[cfg(test)]
mod tests {
    use taskflow::auth::rbac::{ACCESS_DENIED_TITLE, MatrixRow};
    use taskflow::{
        AccessDenied, AuthContext, CreateTaskInput, Decision, Guard, Guarded, Permission,
        RbacService, Task, TeamMember, TeamRole, WithRole, with_rbac,
    };
    use uuid::Uuid;

    fn tasks_by(creators: &[&str]) -> Vec<Task> {
        creators
            .iter()
            .enumerate()
            .map(|(i, creator)| Task::new(CreateTaskInput::titled(format!("t{}", i)), *creator))
            .collect()
    }

    // ==================== Role table ====================

    #[test]
    fn test_owner_holds_every_permission() {
        assert!(RbacService::has_all_permissions(
            TeamRole::Owner,
            &Permission::ALL
        ));
        assert_eq!(
            RbacService::get_permissions(TeamRole::Owner).len(),
            Permission::ALL.len()
        );
    }

    #[test]
    fn test_role_permission_subsets() {
        for permission in RbacService::get_permissions(TeamRole::Member) {
            assert!(RbacService::has_permission(TeamRole::Admin, *permission));
        }
        for permission in RbacService::get_permissions(TeamRole::Admin) {
            assert!(RbacService::has_permission(TeamRole::Owner, *permission));
        }
    }

    #[test]
    fn test_matrix_matches_lookups() {
        let rows: Vec<MatrixRow> = RbacService::matrix();
        assert_eq!(rows.len(), 14);
        for row in rows {
            assert_eq!(row.owner, RbacService::has_permission(TeamRole::Owner, row.permission));
            assert_eq!(row.admin, RbacService::has_permission(TeamRole::Admin, row.permission));
            assert_eq!(row.member, RbacService::has_permission(TeamRole::Member, row.permission));
        }
    }

    #[test]
    fn test_unknown_names_deny() {
        assert!(RbacService::get_permissions_by_name("superuser").is_empty());
        assert!(!RbacService::has_permission_named("superuser", "task:read"));
        assert!(!RbacService::has_permission_named("owner", "task:explode"));
        assert!(!RbacService::has_any_permission_named("guest", &["task:read"]));
        assert!(!RbacService::can_perform_action_named("guest", "task:read", None, None));
    }

    // ==================== Resource-scoped checks ====================

    #[test]
    fn test_ownership_rules() {
        let cases = [
            (TeamRole::Member, Some("u1"), Some("u1"), Decision::OwnResource),
            (TeamRole::Member, Some("u1"), Some("u2"), Decision::NotResourceOwner),
            (TeamRole::Admin, Some("u1"), Some("u2"), Decision::ElevatedOverride),
            (TeamRole::Owner, Some("u1"), Some("u2"), Decision::ElevatedOverride),
            (TeamRole::Member, None, Some("u2"), Decision::RoleGranted),
            (TeamRole::Member, Some(""), Some("u2"), Decision::RoleGranted),
        ];

        for (role, owner, actor, expected) in cases {
            assert_eq!(
                RbacService::explain_action(role, Permission::TASK_UPDATE, owner, actor),
                expected,
                "{:?} {:?} {:?}",
                role,
                owner,
                actor
            );
        }
    }

    #[test]
    fn test_missing_permission_beats_ownership() {
        assert!(!RbacService::can_perform_action(
            TeamRole::Member,
            Permission::TASK_DELETE,
            Some("u1"),
            Some("u1")
        ));
    }

    // ==================== Filtering ====================

    #[test]
    fn test_filter_agrees_with_item_checks() {
        let tasks = tasks_by(&["u1", "u2", "u1", "u3"]);

        for role in TeamRole::ALL {
            let filtered =
                RbacService::filter_by_permission(&tasks, role, "u1", Permission::TASK_READ);
            let expected: Vec<&Task> = tasks
                .iter()
                .filter(|t| {
                    RbacService::can_perform_action(
                        role,
                        Permission::TASK_READ,
                        Some(t.created_by.as_str()),
                        Some("u1"),
                    )
                })
                .collect();
            assert_eq!(filtered, expected, "{:?}", role);
        }
    }

    #[test]
    fn test_filter_preserves_order_for_members() {
        let tasks = tasks_by(&["u1", "u2", "u1"]);
        let titles: Vec<String> =
            RbacService::filter_by_permission(tasks, TeamRole::Member, "u1", Permission::TASK_READ)
                .into_iter()
                .map(|t| t.title)
                .collect();
        assert_eq!(titles, vec!["t0", "t2"]);
    }

    #[test]
    fn test_filter_without_permission_is_empty() {
        let tasks = tasks_by(&["u1"]);
        assert!(
            RbacService::filter_by_permission(&tasks, TeamRole::Member, "u1", Permission::TASK_DELETE)
                .is_empty()
        );
        assert!(RbacService::filter_by_permission_named(&tasks, "nobody", "u1", "task:read").is_empty());
    }

    // ==================== Guards ====================

    #[test]
    fn test_guard_renders_or_denies() {
        let guard = Guard::new(
            vec![Permission::TEAM_UPDATE, Permission::TEAM_INVITE],
            |name: &str| format!("settings for {}", name),
        );

        match guard.render(WithRole::new(TeamRole::Admin, "Acme")) {
            Guarded::Allowed(body) => assert_eq!(body, "settings for Acme"),
            Guarded::Denied(denied) => panic!("admin denied: {}", denied),
        }

        let denied = guard.render(WithRole::new(TeamRole::Member, "Acme"));
        assert_eq!(denied, Guarded::Denied(AccessDenied::default()));
        assert!(!guard.allows(None));
    }

    #[test]
    fn test_with_rbac_unknown_role_sees_placeholder() {
        let view = with_rbac(|n: u32| n * 2, &[Permission::TASK_READ]);

        assert_eq!(view(WithRole::new(TeamRole::Member, 21)), Guarded::Allowed(42));
        let denied = view(WithRole::named("visitor", 21)).into_result().unwrap_err();
        assert_eq!(denied.title, ACCESS_DENIED_TITLE);
    }

    // ==================== Auth context ====================

    #[test]
    fn test_auth_context_scopes_role_per_team() {
        let team_a = Uuid::new_v4();
        let team_b = Uuid::new_v4();
        let ctx = AuthContext::new("u1", TeamRole::Member).with_memberships(vec![
            TeamMember::new(team_a, "u1", TeamRole::Owner),
            TeamMember::new(team_b, "u1", TeamRole::Member),
        ]);

        assert!(ctx.rbac(Some(team_a)).has_permission(Permission::TEAM_DELETE));
        assert!(!ctx.rbac(Some(team_b)).has_permission(Permission::TEAM_DELETE));
        assert_eq!(ctx.rbac(None).role(), TeamRole::Member);
    }
}
