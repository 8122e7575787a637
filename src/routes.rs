use crate::api::{attendance, employee};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::post().to(employee::create_employee))
                            .route(web::get().to(employee::list_employees)),
                    )
                    // /employees/departments must register before /{id}
                    .service(
                        web::resource("/departments")
                            .route(web::get().to(employee::list_departments)),
                    )
                    // /employees/{id}
                    .service(
                        web::resource("/{id}").route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    // /attendance
                    .service(
                        web::resource("")
                            .route(web::post().to(attendance::mark_attendance))
                            .route(web::get().to(attendance::get_all_attendance)),
                    )
                    // /attendance/{employee_id}
                    .service(
                        web::resource("/{employee_id}")
                            .route(web::get().to(attendance::get_employee_attendance)),
                    ),
            ),
    );
}
