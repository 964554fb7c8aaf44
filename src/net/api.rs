//! Endpoint facade over [`ApiClient`].
//!
//! Each method names one REST route; paths are built by the small helpers at
//! the bottom so they can be asserted without a transport. Mutations ignore
//! the response body because views re-fetch after every save.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::client::{ApiClient, Credentials};
use super::http::{BrowserTransport, HttpError, Method, Transport};
use super::types::{
    Clo, CloInput, CloMapping, CloMappingInput, Course, CourseAssignment, CourseInput, DashboardStats, Faculty,
    FacultyInput, FacultyWithCourses, LoginRequest, LoginResponse, ProfileResponse, User,
};

/// Calls made on behalf of one credentials snapshot.
pub struct Api<'a, T = BrowserTransport> {
    client: &'a ApiClient<T>,
    credentials: Option<Credentials>,
}

impl<'a, T: Transport> Api<'a, T> {
    pub fn new(client: &'a ApiClient<T>, credentials: Option<Credentials>) -> Self {
        Self { client, credentials }
    }

    fn creds(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    async fn get<R: serde::de::DeserializeOwned>(&self, path: &str) -> Result<R, HttpError> {
        self.client.get_json(self.creds(), path).await
    }

    async fn send<B: serde::Serialize>(&self, method: Method, path: &str, body: &B) -> Result<(), HttpError> {
        self.client.send_unit(self.creds(), method, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<(), HttpError> {
        self.client.send_unit::<()>(self.creds(), Method::Delete, path, None).await
    }

    // ---- auth ----

    /// `POST /auth/login`. Never carries a bearer token.
    ///
    /// # Errors
    ///
    /// Any [`HttpError`]; bad credentials arrive as `AuthExpired { epoch: None }`
    /// or `ServerError` depending on the status the server picks.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, HttpError> {
        self.client.send_json(None, Method::Post, "/auth/login", request).await
    }

    /// `GET /auth/profile`.
    ///
    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn profile(&self) -> Result<User, HttpError> {
        let resp: ProfileResponse = self.get("/auth/profile").await?;
        Ok(resp.user)
    }

    // ---- courses ----

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn courses(&self) -> Result<Vec<Course>, HttpError> {
        self.get("/courses").await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn create_course(&self, input: &CourseInput) -> Result<(), HttpError> {
        self.send(Method::Post, "/courses", input).await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn update_course(&self, id: &str, input: &CourseInput) -> Result<(), HttpError> {
        self.send(Method::Put, &course_path(id), input).await
    }

    /// Deactivates the course server-side.
    ///
    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn delete_course(&self, id: &str) -> Result<(), HttpError> {
        self.delete(&course_path(id)).await
    }

    // ---- CLOs ----

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn clos_for_course(&self, course_id: &str) -> Result<Vec<Clo>, HttpError> {
        self.get(&clos_for_course_path(course_id)).await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn create_clo(&self, input: &CloInput) -> Result<(), HttpError> {
        self.send(Method::Post, "/clos", input).await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn update_clo(&self, id: &str, input: &CloInput) -> Result<(), HttpError> {
        self.send(Method::Put, &clo_path(id), input).await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn map_clo(&self, mapping: &CloMappingInput) -> Result<(), HttpError> {
        self.send(Method::Post, "/clos/mapping", mapping).await
    }

    // ---- HOD: faculty ----

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn faculty(&self) -> Result<Vec<Faculty>, HttpError> {
        self.get("/hod/faculty").await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn faculty_by_id(&self, id: &str) -> Result<Faculty, HttpError> {
        self.get(&faculty_path(id)).await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn faculty_by_department(&self, department_id: &str) -> Result<Vec<Faculty>, HttpError> {
        self.get(&format!("/hod/faculty/department/{department_id}")).await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn faculty_with_courses(&self, id: &str) -> Result<FacultyWithCourses, HttpError> {
        self.get(&format!("{}/courses", faculty_path(id))).await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn create_faculty(&self, input: &FacultyInput) -> Result<(), HttpError> {
        self.send(Method::Post, "/hod/faculty", input).await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn update_faculty(&self, id: &str, input: &FacultyInput) -> Result<(), HttpError> {
        self.send(Method::Put, &faculty_path(id), input).await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn delete_faculty(&self, id: &str) -> Result<(), HttpError> {
        self.delete(&faculty_path(id)).await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn assign_course(&self, assignment: &CourseAssignment) -> Result<(), HttpError> {
        self.send(Method::Post, "/hod/faculty/assign-course", assignment).await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn courses_for_faculty(&self, faculty_id: &str) -> Result<Vec<Course>, HttpError> {
        self.get(&format!("{}/assigned-courses", faculty_path(faculty_id))).await
    }

    /// `DELETE` with a JSON body naming the assignment.
    ///
    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn remove_course(&self, assignment: &CourseAssignment) -> Result<(), HttpError> {
        self.send(Method::Delete, "/hod/faculty/remove-course", assignment).await
    }

    // ---- HOD: courses ----

    /// Courses owned by the HOD's department.
    ///
    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn hod_courses(&self) -> Result<Vec<Course>, HttpError> {
        self.get("/hod/courses").await
    }

    /// Every course visible to the HOD, across departments.
    ///
    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn hod_all_courses(&self) -> Result<Vec<Course>, HttpError> {
        self.get("/hod/all-courses").await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn hod_course(&self, id: &str) -> Result<Course, HttpError> {
        self.get(&hod_course_path(id)).await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn hod_create_course(&self, input: &CourseInput) -> Result<(), HttpError> {
        self.send(Method::Post, "/hod/course", input).await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn hod_update_course(&self, id: &str, input: &CourseInput) -> Result<(), HttpError> {
        self.send(Method::Put, &hod_course_path(id), input).await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn hod_delete_course(&self, id: &str) -> Result<(), HttpError> {
        self.delete(&hod_course_path(id)).await
    }

    // ---- HOD: CLOs ----

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn hod_create_clo(&self, input: &CloInput) -> Result<(), HttpError> {
        self.send(Method::Post, "/hod/clo", input).await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn hod_update_clo(&self, id: &str, input: &CloInput) -> Result<(), HttpError> {
        self.send(Method::Put, &format!("/hod/clo/{id}"), input).await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn hod_clos_for_course(&self, course_id: &str) -> Result<Vec<Clo>, HttpError> {
        self.get(&format!("/hod/clo/course/{course_id}")).await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn hod_map_clo(&self, mapping: &CloMappingInput) -> Result<(), HttpError> {
        self.send(Method::Post, "/hod/clo/map", mapping).await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn hod_clo_mappings(&self, course_id: &str) -> Result<Vec<CloMapping>, HttpError> {
        self.get(&format!("/hod/clo/mappings/{course_id}")).await
    }

    /// # Errors
    ///
    /// Any [`HttpError`].
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, HttpError> {
        self.get("/hod/dashboard/stats").await
    }
}

fn course_path(id: &str) -> String {
    format!("/courses/{id}")
}

fn clo_path(id: &str) -> String {
    format!("/clos/{id}")
}

fn clos_for_course_path(course_id: &str) -> String {
    format!("/clos/course/{course_id}")
}

fn faculty_path(id: &str) -> String {
    format!("/hod/faculty/{id}")
}

fn hod_course_path(id: &str) -> String {
    format!("/hod/course/{id}")
}
