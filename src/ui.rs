use crate::sheet::{MAX_DAYS_PER_PERSON, MAX_QUOTA_PER_DAY};

pub fn render_index(month: u32) -> String {
    INDEX_HTML
        .replace("{{MONTH}}", month_name(month))
        .replace("{{MAX_DAYS}}", &MAX_DAYS_PER_PERSON.to_string())
        .replace("{{MAX_QUOTA}}", &MAX_QUOTA_PER_DAY.to_string())
}

fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    month
        .checked_sub(1)
        .and_then(|index| NAMES.get(index as usize))
        .copied()
        .unwrap_or("This month")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Monthly Signup Sheet</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Georgia", serif;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: #5f5c57;
    }

    .entry {
      display: flex;
      gap: 12px;
      flex-wrap: wrap;
    }

    .entry input {
      flex: 1 1 220px;
      padding: 12px 14px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      font-size: 1rem;
    }

    button {
      border: none;
      border-radius: 12px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
    }

    .calendar-container {
      display: none;
      gap: 18px;
    }

    .calendar-container.open {
      display: grid;
    }

    .calendar {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 8px;
    }

    .day {
      background: white;
      color: var(--ink);
      border: 1px solid rgba(47, 72, 88, 0.12);
      padding: 10px 4px;
      display: grid;
      gap: 4px;
      justify-items: center;
    }

    .day .quota {
      font-size: 0.75rem;
      font-weight: 400;
      color: #8b857d;
    }

    .day.selected {
      background: var(--accent);
      color: white;
    }

    .day.selected .quota {
      color: white;
    }

    .day.disabled:not(.selected) {
      opacity: 0.45;
      cursor: not-allowed;
    }

    #submit {
      background: var(--accent);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>{{MONTH}} signup sheet</h1>
      <p class="subtitle">Pick up to {{MAX_DAYS}} days. Each day takes at most {{MAX_QUOTA}} people.</p>
    </header>

    <section class="entry">
      <input id="username" type="text" placeholder="Your name" autocomplete="off" />
      <button id="start" type="button">Start</button>
    </section>

    <section class="calendar-container" id="calendar-container">
      <p id="welcome-message"></p>
      <div class="calendar" id="calendar"></div>
      <button id="submit" type="button">Submit</button>
    </section>
  </main>
  <script>
    const container = document.getElementById('calendar-container');
    const calendar = document.getElementById('calendar');
    const usernameInput = document.getElementById('username');
    const welcome = document.getElementById('welcome-message');

    const post = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: body === undefined ? undefined : JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error(await res.text());
      }
      return res.json();
    };

    const paintCell = (element, cell) => {
      element.querySelector('.quota').textContent = cell.label;
      element.classList.toggle('selected', cell.selected);
      element.classList.toggle('disabled', cell.disabled);
    };

    const renderCalendar = (cells) => {
      calendar.innerHTML = '';
      cells.forEach((cell) => {
        const element = document.createElement('button');
        element.type = 'button';
        element.className = 'day';
        element.dataset.day = cell.day;
        element.textContent = cell.day;

        const quota = document.createElement('span');
        quota.className = 'quota';
        element.appendChild(quota);
        paintCell(element, cell);

        element.addEventListener('click', async () => {
          try {
            const result = await post(`/api/days/${cell.day}/toggle`);
            paintCell(element, result.cell);
          } catch (err) {
            alert(err.message);
          }
        });
        calendar.appendChild(element);
      });
    };

    document.getElementById('start').addEventListener('click', async () => {
      try {
        const result = await post('/api/start', { username: usernameInput.value });
        welcome.textContent = result.welcome;
        container.classList.add('open');
        renderCalendar(result.sheet.cells);
      } catch (err) {
        alert(err.message);
      }
    });

    document.getElementById('submit').addEventListener('click', async () => {
      try {
        const result = await post('/api/submit');
        alert(result.message);
        usernameInput.value = '';
        welcome.textContent = '';
        calendar.innerHTML = '';
        container.classList.remove('open');
      } catch (err) {
        alert(err.message);
      }
    });
  </script>
</body>
</html>
"#;
