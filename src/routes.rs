//! Declarative route table with role requirements.
//!
//! An empty role list means "any authenticated user". The table drives both
//! the guard on each page and the navigation links shown in the layout.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

/// One navigable, protected view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteSpec {
    pub path: &'static str,
    pub title: &'static str,
    pub roles: &'static [Role],
}

impl RouteSpec {
    /// Whether a user with `role` may open this route.
    pub fn admits(&self, role: Role) -> bool {
        self.roles.is_empty() || self.roles.contains(&role)
    }
}

pub const ANY_ROLE: &[Role] = &[];
pub const COURSE_ROLES: &[Role] = &[Role::Hod, Role::Admin];
pub const CLO_ROLES: &[Role] = &[Role::Hod, Role::Faculty];
pub const PO_ROLES: &[Role] = &[Role::Hod, Role::Admin];
pub const FACULTY_ROLES: &[Role] = &[Role::Hod];

pub const DASHBOARD: RouteSpec = RouteSpec {
    path: "/dashboard",
    title: "Dashboard",
    roles: ANY_ROLE,
};

pub const COURSES: RouteSpec = RouteSpec {
    path: "/courses",
    title: "Courses",
    roles: COURSE_ROLES,
};

pub const CLOS: RouteSpec = RouteSpec {
    path: "/clos",
    title: "CLOs",
    roles: CLO_ROLES,
};

pub const POS: RouteSpec = RouteSpec {
    path: "/pos",
    title: "Program Outcomes",
    roles: PO_ROLES,
};

pub const FACULTY: RouteSpec = RouteSpec {
    path: "/faculty",
    title: "Faculty",
    roles: FACULTY_ROLES,
};

/// Protected routes in menu order.
pub const PROTECTED: [RouteSpec; 5] = [DASHBOARD, COURSES, CLOS, POS, FACULTY];

/// Routes a user with `role` can open, in menu order.
pub fn visible_for(role: Role) -> Vec<RouteSpec> {
    PROTECTED.into_iter().filter(|r| r.admits(role)).collect()
}
